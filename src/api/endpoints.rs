pub fn analyze() -> &'static str {
    "/api/v1/emails/analyze"
}

pub fn fetch_inbox() -> &'static str {
    "/api/v1/emails/fetch"
}

pub fn generate_reply() -> &'static str {
    "/api/v1/responses/generate"
}

pub fn health() -> &'static str {
    "/health"
}
