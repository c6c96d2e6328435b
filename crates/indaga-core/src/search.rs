//! Web search collaborator.
//!
//! The pipeline only needs concatenated document text, so a provider is
//! anything that turns a topic into [`SearchHit`] records. Providers are
//! chosen once at startup; [`SimulatedSearch`] is the offline stand-in used
//! when no real search backend is configured.

use serde::{Deserialize, Serialize};

use crate::error::SearchResult;

/// Topic used when the caller supplies a blank one.
pub const FALLBACK_TOPIC: &str = "tema no especificado";

const NO_RESULTS_TEXT: &str = "No se encontraron resultados para analizar.";
const NO_CONTENT_TEXT: &str = "No se pudo extraer contenido de los resultados de búsqueda.";

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page title.
    pub title: String,
    /// Source URL.
    pub url: String,
    /// Snippet or extracted content.
    pub content: String,
    /// Full page text, when the provider returns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl SearchHit {
    /// Best available text: raw content if non-empty, else the snippet.
    pub fn text(&self) -> &str {
        self.raw_content
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or(&self.content)
    }
}

/// Which search backend to construct at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SearchBackend {
    /// Offline generated results.
    #[default]
    Simulated,
}

impl SearchBackend {
    /// Returns the backend name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simulated => "simulated",
        }
    }

    /// Construct the provider for this backend.
    pub fn provider(&self) -> Box<dyn SearchProvider> {
        match self {
            Self::Simulated => Box::new(SimulatedSearch::default()),
        }
    }
}

/// Capability to search the web for a topic.
pub trait SearchProvider {
    /// Short provider name for logs and reports.
    fn name(&self) -> &str;

    /// Fetch results for `topic`. No ordering or count is guaranteed.
    fn search(&self, topic: &str) -> SearchResult<Vec<SearchHit>>;
}

impl<P: SearchProvider + ?Sized> SearchProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn search(&self, topic: &str) -> SearchResult<Vec<SearchHit>> {
        (**self).search(topic)
    }
}

/// Concatenate the best text of every result, separated by blank lines.
///
/// Never returns an empty string: no results, or results without content,
/// yield a short explanatory sentence instead.
pub fn full_text(results: &[SearchHit]) -> String {
    if results.is_empty() {
        return NO_RESULTS_TEXT.to_string();
    }

    let mut text = String::new();
    for content in results.iter().map(SearchHit::text) {
        if content.trim().is_empty() {
            continue;
        }
        text.push_str(content);
        text.push_str("\n\n");
    }

    if text.trim().is_empty() {
        return NO_CONTENT_TEXT.to_string();
    }
    text
}

const TECH_TERMS: [&str; 18] = [
    "algoritmos",
    "desarrollo",
    "frameworks",
    "metodologías",
    "innovación",
    "automatización",
    "sistemas",
    "aplicaciones",
    "código",
    "interfaces",
    "experiencia de usuario",
    "rendimiento",
    "seguridad",
    "escalabilidad",
    "mantenibilidad",
    "pruebas",
    "despliegue",
    "integración continua",
];

const DOMAINS: [&str; 5] = [
    "techinnovation.com",
    "devexplorer.org",
    "futuretech.io",
    "coderevolution.net",
    "techtrends.com",
];

/// Deterministic offline provider.
///
/// Produces five articles per topic with three paragraphs each. Terms are
/// drawn by rotation through a fixed vocabulary, so the same topic always
/// yields the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSearch {
    results: usize,
    paragraphs: usize,
}

impl Default for SimulatedSearch {
    fn default() -> Self {
        Self {
            results: DOMAINS.len(),
            paragraphs: 3,
        }
    }
}

impl SimulatedSearch {
    /// Provider returning `results` articles (at most five).
    pub fn with_results(mut self, results: usize) -> Self {
        self.results = results.min(DOMAINS.len());
        self
    }

    fn titles(topic: &str) -> [String; 5] {
        [
            format!("Introducción a {topic}: Conceptos fundamentales"),
            format!("Los 5 avances más importantes en {topic} en 2025"),
            format!("Cómo implementar {topic} en proyectos reales"),
            format!("Ventajas y desafíos de {topic} en la industria actual"),
            format!("El futuro de {topic}: tendencias y predicciones"),
        ]
    }

    fn paragraph(topic: &str, result: usize, paragraph: usize) -> String {
        let offset = result * 3 + paragraph * 4;
        let term = |k: usize| TECH_TERMS[(offset + k) % TECH_TERMS.len()];
        format!(
            "En el ámbito de {topic}, es fundamental considerar aspectos como {} y {}. \
             Los expertos recomiendan integrar enfoques de {} mientras se mantiene un equilibrio con {}. \
             Las investigaciones recientes muestran que la adopción de {topic} puede mejorar \
             significativamente la productividad y reducir costos operativos.",
            term(0),
            term(1),
            term(2),
            term(3),
        )
    }
}

impl SearchProvider for SimulatedSearch {
    fn name(&self) -> &str {
        "simulated"
    }

    #[tracing::instrument(skip(self), fields(provider = "simulated"))]
    fn search(&self, topic: &str) -> SearchResult<Vec<SearchHit>> {
        let topic = match topic.trim() {
            "" => FALLBACK_TOPIC,
            trimmed => trimmed,
        };
        let slug = topic.to_lowercase().replace(' ', "-");
        let titles = Self::titles(topic);

        let results: Vec<SearchHit> = titles
            .into_iter()
            .zip(DOMAINS)
            .take(self.results)
            .enumerate()
            .map(|(i, (title, domain))| {
                let content = (0..self.paragraphs)
                    .map(|j| Self::paragraph(topic, i, j))
                    .collect::<Vec<_>>()
                    .join("\n\n");
                SearchHit {
                    title,
                    url: format!("https://www.{domain}/articulos/{slug}-analisis-{}", i + 1),
                    raw_content: Some(content.clone()),
                    content,
                }
            })
            .collect();

        tracing::debug!(results = results.len(), "generated simulated results");
        Ok(results)
    }
}
