/// Canned reply for the advisory chatbot. Stateless: no conversation memory.
pub fn chatbot_reply(message: &str) -> &'static str {
    if message.to_lowercase().contains("crop") {
        "Please share soil pH & rainfall for crop suggestion."
    } else {
        "I can assist with weather, soil, crop and pest advisories."
    }
}
