//! Output / interface language selector and its localized strings.

use serde::{Deserialize, Deserializer, Serialize};

/// Language of both the generated text and the form labels.
///
/// Only an explicit English value selects English; anything else, including
/// unknown values and non-string JSON such as `null`, falls back to Portuguese.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "en" | "english" | "en-us" | "en-gb" => Language::English,
            _ => Language::Portuguese,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
        }
    }

    pub fn empty_description_error(self) -> &'static str {
        self.labels().empty_description_error
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Portuguese => &PORTUGUESE_LABELS,
            Language::English => &ENGLISH_LABELS,
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(s)) => Language::parse(&s),
            _ => Language::default(),
        })
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

/// Every user-facing string on the form, in one language.
#[derive(Debug, Serialize)]
pub struct Labels {
    pub language_picker: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub job_description: &'static str,
    pub job_description_help: &'static str,
    pub mandatory_requirements: &'static str,
    pub mandatory_requirements_help: &'static str,
    pub preferred_requirements: &'static str,
    pub preferred_requirements_help: &'static str,
    pub tech_stack: &'static str,
    pub tech_stack_help: &'static str,
    pub generate_button: &'static str,
    pub counter: &'static str,
    pub result_heading: &'static str,
    pub copy_label: &'static str,
    pub total_characters: &'static str,
    pub model_banner: &'static str,
    pub empty_description_error: &'static str,
}

static PORTUGUESE_LABELS: Labels = Labels {
    language_picker: "Escolha o idioma / Choose the language",
    title: "Gerador de Texto ATS-Friendly",
    intro: "Preencha os campos abaixo com as informações da vaga e seu tech stack. \
        O texto será gerado utilizando a API da OpenAI.",
    job_description: "Descrição da Vaga",
    job_description_help: "Insira a descrição da vaga com as principais responsabilidades.",
    mandatory_requirements: "Requisitos Obrigatórios",
    mandatory_requirements_help: "Liste os requisitos obrigatórios.",
    preferred_requirements: "Requisitos Desejáveis",
    preferred_requirements_help: "Liste os requisitos desejáveis.",
    tech_stack: "Seu Tech Stack",
    tech_stack_help: "Liste suas tecnologias e habilidades. Pode ser um texto de apresentação.",
    generate_button: "Gerar Texto",
    counter: "Currículos Gerados",
    result_heading: "Texto Gerado",
    copy_label: "Texto para Copiar",
    total_characters: "Total de caracteres",
    model_banner: "Modelo de IA carregado",
    empty_description_error: "A descrição da vaga não pode estar vazia.",
};

static ENGLISH_LABELS: Labels = Labels {
    language_picker: "Escolha o idioma / Choose the language",
    title: "ATS-Friendly Text Generator",
    intro: "Fill in the fields below with the job information and your tech stack. \
        The text will be generated using the OpenAI API.",
    job_description: "Job Description",
    job_description_help: "Enter the job description with the main responsibilities.",
    mandatory_requirements: "Mandatory Requirements",
    mandatory_requirements_help: "List the mandatory requirements.",
    preferred_requirements: "Preferred Requirements",
    preferred_requirements_help: "List the preferred requirements.",
    tech_stack: "Your Tech Stack",
    tech_stack_help: "List your technologies and skills. It can be a presentation resume.",
    generate_button: "Generate Text",
    counter: "Generated Resumes",
    result_heading: "Generated Text",
    copy_label: "Text to Copy",
    total_characters: "Total characters",
    model_banner: "AI model loaded",
    empty_description_error: "The job description cannot be empty.",
};
