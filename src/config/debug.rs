//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit a line for every fetch spawned and every result applied.
    pub log_fetch: bool,

    /// Anything about handling self.selection (select / back transitions).
    pub log_selection: bool,

    /// Log search text changes and filtered list sizes.
    pub log_search: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: false,
    log_selection: false,
    log_search: false,
};
