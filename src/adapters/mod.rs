pub mod gemini;
pub mod sheets;
