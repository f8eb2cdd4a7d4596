//! Static domain synonym table.
//!
//! Hand-authored and deliberately asymmetric: `"search"` maps to `"find"`
//! and `"find"` maps back to `"search"`, but `"make"` does not map to
//! `"create"`. Only tokens present in a query are ever looked up, so an
//! entry affects exactly the queries that contain its key.

/// Token -> synonyms. Keys are unique and lowercase.
pub const SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("search", &["find", "lookup", "query", "seek"]),
    ("find", &["search", "lookup", "locate"]),
    ("lookup", &["search", "find"]),
    ("query", &["search", "lookup"]),
    ("create", &["make", "add", "new"]),
    ("make", &["build", "construct"]),
    ("add", &["create", "insert"]),
    ("new", &["create"]),
    ("delete", &["remove", "erase", "destroy"]),
    ("remove", &["delete", "erase"]),
    ("update", &["modify", "edit", "change"]),
    ("edit", &["modify", "update", "change"]),
    ("get", &["fetch", "retrieve", "read"]),
    ("fetch", &["get", "retrieve", "download"]),
    ("read", &["get", "open", "view"]),
    ("write", &["save", "store", "put"]),
    ("list", &["show", "enumerate", "browse"]),
    ("show", &["list", "display", "view"]),
    ("run", &["execute", "launch", "start"]),
    ("execute", &["run", "invoke"]),
    ("send", &["post", "deliver", "message"]),
    ("email", &["mail", "message", "send"]),
    ("message", &["chat", "send", "notify"]),
    ("schedule", &["calendar", "event", "appointment", "meeting"]),
    ("meeting", &["calendar", "event", "schedule"]),
    ("file", &["document", "files"]),
    ("document", &["file", "doc"]),
    ("image", &["picture", "photo"]),
    ("analyze", &["inspect", "examine", "evaluate"]),
    ("summarize", &["summary", "digest"]),
    ("translate", &["translation", "convert"]),
    ("weather", &["forecast", "temperature"]),
    ("database", &["db", "sql", "table"]),
    ("code", &["source", "repository", "repo"]),
    ("issue", &["ticket", "bug"]),
];

/// Synonyms registered for `token`, if any.
pub fn synonyms_for(token: &str) -> Option<&'static [&'static str]> {
    SYNONYM_TABLE
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, synonyms)| *synonyms)
}
