// Lingua - startup locale selection for English/Chinese applications
//
// Resolves the initial and fallback locale from the user's language
// preference and assembles the configuration an i18n runtime starts from.

// Re-export the i18n API
pub use lingua_i18n::*;

// Re-export logging under its own name
pub use lingua_log as log;
