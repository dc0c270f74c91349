//! Prompt construction and the fixed fallback lists

pub const TOPIC_SYSTEM_PROMPT: &str = "You are a creative assistant that generates relevant \
     work topics for professionals. Generate 5-7 specific, actionable topic ideas that are \
     relevant to the field and role. Each topic should be concise (max 60 characters) and \
     practical.";

pub fn topic_user_prompt(field: &str, role: &str) -> String {
    format!(
        "Generate 5-7 relevant work topics for a {role} working in {field}.\n\n\
         Field: {field}\n\
         Role: {role}\n\n\
         The topics should be:\n\
         - Specific and actionable\n\
         - Relevant to current industry trends\n\
         - Practical for daily work\n\
         - Concise (max 60 characters each)\n\n\
         Please provide the topics as a numbered list, each on a new line."
    )
}

pub fn keyword_prompt(field: &str, role: &str, topic: Option<&str>) -> String {
    let focus = match topic {
        Some(topic) => format!("for finding references about \"{topic}\""),
        None => "that this role would reach for most often".to_string(),
    };
    format!(
        "You are a {role} in the {field} field. Recommend 10 effective search keywords {focus}.\n\n\
         The keywords must:\n\
         - Work well on Pinterest, Behance and Dribbble\n\
         - Be specific and practical English search phrases\n\
         - Include current design and development terms\n\
         - Be 2-5 words each\n\n\
         List one keyword per line with no numbering or commentary."
    )
}

/// Substitute topics when the completion endpoint is unavailable
pub fn fallback_topics() -> Vec<String> {
    [
        "Latest trend analysis",
        "Competitor research",
        "Target audience analysis",
        "Success case studies",
        "Problem solving approaches",
        "Innovative ideas",
        "Cost optimization",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Substitute search keywords when the completion endpoint is unavailable
pub fn fallback_keywords() -> Vec<String> {
    [
        "minimal ui design",
        "modern branding identity",
        "clean landing page",
        "mobile app inspiration",
        "design system components",
        "typography layout",
        "color palette trends",
        "portfolio case study",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
