use crate::core::assistant;
use crate::core::cache::CatalogCache;
use crate::core::flow::{self, FlowState, StepOption, TurnInput};
use crate::core::recommend::{self, match_score};
use crate::domain::model::{FilterCriteria, Package, Selections};
use crate::domain::ports::{AnswerGenerator, CatalogSource, Clock};
use serde::Serialize;
use std::cmp::Ordering;

/// Shown when the configured source produced no catalog at all. Must stay
/// distinguishable from the no-matches fallback below.
pub const EMPTY_CATALOG_MESSAGE: &str = "Sorry, there are no packages available at the moment. Please check back later or talk to our AI assistant for help!";

/// Shown when filtering matched nothing and the first few catalog entries
/// are returned instead.
pub const NO_MATCH_MESSAGE: &str =
    "I couldn't find exact matches, but here are some amazing packages you might love!";

/// How many catalog entries accompany a free-text question as AI context.
const AI_CONTEXT_LIMIT: usize = 5;

/// How many packages the no-matches fallback returns.
const FALLBACK_RESULT_COUNT: usize = 3;

/// One complete turn back to the caller. Selections are echoed so the
/// stateless server never has to remember them.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub message: String,
    pub flow_state: FlowState,
    pub options: &'static [StepOption],
    pub selections: Selections,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<Package>>,
    pub is_ai_response: bool,
}

/// Ties the flow graph, the recommendation engine, the catalog cache and
/// the answer collaborator together into the conversation-turn boundary.
pub struct ChatEngine<S, G, K> {
    cache: CatalogCache<S, K>,
    assistant: G,
}

impl<S: CatalogSource, G: AnswerGenerator, K: Clock> ChatEngine<S, G, K> {
    pub fn new(cache: CatalogCache<S, K>, assistant: G) -> Self {
        Self { cache, assistant }
    }

    /// Handles one conversation turn. Never fails: every error mode is
    /// absorbed into a well-formed reply.
    pub async fn handle_turn(
        &self,
        message: &str,
        flow_state: Option<&str>,
        selections: Selections,
    ) -> ChatReply {
        let current = FlowState::parse(flow_state);

        match TurnInput::decode(message) {
            TurnInput::FreeText(text) => self.free_text_turn(&text, selections).await,
            input @ TurnInput::Selection(_) => self.structured_turn(current, selections, &input).await,
        }
    }

    async fn free_text_turn(&self, text: &str, selections: Selections) -> ChatReply {
        let catalog = self.cache.get_catalog(false).await;
        let context = rank_for_context(&catalog, &selections);

        let message = match self.assistant.generate(text, &context).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Answer generator unavailable, using canned reply: {}", e);
                assistant::keyword_reply(text)
            }
        };

        ChatReply {
            message,
            flow_state: FlowState::AiChat,
            options: flow::step(FlowState::AiChat).options,
            selections,
            packages: None,
            is_ai_response: true,
        }
    }

    async fn structured_turn(
        &self,
        current: FlowState,
        selections: Selections,
        input: &TurnInput,
    ) -> ChatReply {
        let outcome = flow::advance(current, selections, input);
        let step = flow::step(outcome.next_state);

        let mut reply = ChatReply {
            message: step.prompt.to_string(),
            flow_state: outcome.next_state,
            options: step.options,
            selections: outcome.selections,
            packages: None,
            is_ai_response: false,
        };

        if outcome.next_state == FlowState::ShowPackages {
            let catalog = self.cache.get_catalog(false).await;
            if catalog.is_empty() {
                reply.message = EMPTY_CATALOG_MESSAGE.to_string();
                reply.packages = Some(Vec::new());
            } else {
                let recommended = recommend::recommend(&catalog, &reply.selections);
                if recommended.is_empty() {
                    reply.message = NO_MATCH_MESSAGE.to_string();
                    reply.packages =
                        Some(catalog.into_iter().take(FALLBACK_RESULT_COUNT).collect());
                } else {
                    reply.packages = Some(recommended);
                }
            }
        }

        reply
    }

    /// All active packages, via the cache.
    pub async fn list_packages(&self) -> Vec<Package> {
        self.cache.get_catalog(false).await
    }

    pub async fn get_package(&self, id: &str) -> Option<Package> {
        self.cache
            .get_catalog(false)
            .await
            .into_iter()
            .find(|package| package.id == id)
    }

    /// Filter by explicit criteria, bypassing the dialog mapping.
    pub async fn filter_packages(&self, criteria: &FilterCriteria) -> Vec<Package> {
        let catalog = self.cache.get_catalog(false).await;
        recommend::filter_packages(&catalog, criteria)
    }

    /// Forces a catalog refresh and reports how many packages came back.
    pub async fn sync_catalog(&self) -> usize {
        self.cache.get_catalog(true).await.len()
    }
}

/// Up to the five catalog entries most relevant to the current selections,
/// ranked by match score (catalog order breaks ties).
fn rank_for_context(catalog: &[Package], selections: &Selections) -> Vec<Package> {
    let mut ranked: Vec<Package> = catalog.to_vec();
    ranked.sort_by(|a, b| {
        match_score(b, selections)
            .partial_cmp(&match_score(a, selections))
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(AI_CONTEXT_LIMIT);
    ranked
}
