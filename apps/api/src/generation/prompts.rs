// Prompt templates for text generation.
// Field values are inserted verbatim in a single pass: no escaping, trimming or truncation.
// Template whitespace, including the Portuguese template's leading and trailing
// newlines, is part of the prompt text.

use crate::generation::language::Language;

/// Approximate length requested from the model, in characters.
pub const TARGET_LENGTH_CHARS: u32 = 1500;

/// Builds the user prompt for the selected language.
pub fn build_prompt(
    job_description: &str,
    mandatory_requirements: &str,
    preferred_requirements: &str,
    tech_stack: &str,
    language: Language,
) -> String {
    match language {
        Language::Portuguese => format!(
            "\nVocê é um assistente especializado em gerar textos para candidaturas de emprego. \n\
             Crie um texto com aproximadamente {TARGET_LENGTH_CHARS} caracteres que combine as informações\n\
             abaixo, otimizando-o para passar por sistemas ATS e destacando palavras-chave \n\
             importantes:\n\n\
             - Descrição da Vaga: {job_description}\n\
             - Requisitos Obrigatórios: {mandatory_requirements}\n\
             - Requisitos Desejáveis: {preferred_requirements}\n\
             - Tech Stack do Candidato: {tech_stack}\n\n\
             Gere um texto fluido, coerente e otimizado.  A linguagem deve ser português - BR.\n        "
        ),
        Language::English => format!(
            "You are an assistant specialized in generating job application texts. \
             Create a text with approximately {TARGET_LENGTH_CHARS} characters that combines the information\n\
             below, optimizing it to pass through ATS systems and highlighting important\n\
             keywords:\n\n\
             - Job Description: {job_description}\n\
             - Mandatory Requirements: {mandatory_requirements}\n\
             - Preferred Requirements: {preferred_requirements}\n\
             - Candidate's Tech Stack: {tech_stack}\n\n\
             Generate a fluid, coherent, and optimized text.\n\
             The language must be English."
        ),
    }
}
