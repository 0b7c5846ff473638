// Shared prompt constants.
// Per-feature templates live in a prompts.rs next to the feature that uses them.

/// System message sent with every generation, regardless of the selected language.
pub const SYSTEM_MESSAGE: &str =
    "Você é um assistente que gera textos otimizados para candidaturas de emprego.";
