use crate::knowledge_base::{KnowledgeBase, PestWarningRule};

/// Pest rules whose affected-crop set contains `crop`, in knowledge-base order.
///
/// Matching is exact; callers lowercase user input first. Unknown or empty
/// crop names yield an empty list.
pub fn pest_risk_for_crop<'kb>(kb: &'kb KnowledgeBase, crop: &str) -> Vec<&'kb PestWarningRule> {
    kb.pest_rules().iter().filter(|rule| rule.affects(crop)).collect()
}
