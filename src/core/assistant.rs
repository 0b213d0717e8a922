/// Canned, keyword-matched replies used whenever the generative collaborator
/// is unavailable. Deterministic: the same input always yields the same
/// string, and a caller never sees an error from the free-text path.
pub fn keyword_reply(user_text: &str) -> String {
    let text = user_text.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| text.contains(w));

    if mentions(&["hello", "hi", "hey", "kia ora"]) {
        return "Kia Ora! Welcome to NZ Tours. I'm here to help you plan your perfect New Zealand adventure. Feel free to ask about destinations, activities, booking policies, or anything else about traveling in New Zealand!".to_string();
    }

    if mentions(&["book", "booking", "reserve", "reservation"]) {
        return "Kia Ora! To book a tour, you can browse our packages and click 'Inquire Now', or use our custom trip planner. We require a 20% deposit to secure your booking, with the balance due 30 days before departure. Would you like help finding the perfect package?".to_string();
    }

    if mentions(&["cancel", "refund", "policy"]) {
        return "Our cancellation policy offers: Full refund (minus processing fee) if cancelled 30+ days before departure, 50% refund for 15-29 days, and no refund for less than 15 days. We strongly recommend travel insurance. Would you like more details?".to_string();
    }

    if mentions(&["price", "cost", "expensive", "cheap", "budget"]) {
        return "Kia Ora! Our packages range from budget-friendly options around $500-1,500 NZD to luxury experiences at $5,000+ NZD per person. Prices include accommodation, transportation, activities, and most meals. Would you like me to help find packages in your budget range?".to_string();
    }

    if mentions(&["weather", "season", "when", "best time"]) {
        return "Kia Ora! The best time depends on your interests: Summer (Dec-Feb) for beaches and hiking, Winter (Jun-Aug) for skiing, and Autumn/Spring for fewer crowds and beautiful scenery. Would you like specific recommendations for your travel dates?".to_string();
    }

    if mentions(&["queenstown", "adventure", "bungee", "skydive"]) {
        return "Kia Ora! Queenstown is the adventure capital of the world! From bungee jumping at Kawarau Bridge to skydiving with mountain views, it's perfect for thrill-seekers. Our adventure packages include these activities plus stunning Milford Sound trips. Interested in our Queenstown packages?".to_string();
    }

    if mentions(&["hobbit", "lord of the rings", "movie", "film"]) {
        return "Kia Ora, fellow Tolkien fan! Hobbiton in Matamata is absolutely magical - you can walk through the Shire and even have a drink at the Green Dragon Inn! Our packages include guided tours of the movie set. Would you like details?".to_string();
    }

    if mentions(&["whale", "dolphin", "wildlife", "animal"]) {
        return "Kia Ora! New Zealand has incredible wildlife! Kaikoura is famous for whale watching (95% success rate!), and you can swim with dolphins too. We also have tours to see penguins in Oamaru. Would you like to see our wildlife packages?".to_string();
    }

    if mentions(&["food", "wine", "eat", "restaurant"]) {
        return "Kia Ora! New Zealand has amazing food and wine! The Marlborough and Central Otago regions produce world-class wines. Our culinary tours include vineyard visits, farm-to-table dining, and cooking experiences. Shall I show you our food & wine packages?".to_string();
    }

    "Kia Ora! Thanks for your message. I'm here to help with anything about New Zealand travel - destinations, activities, booking, or trip planning. What would you like to know? You can also browse our packages or use the custom trip planner!".to_string()
}
