//! Spanish stopword list.
//!
//! Function words (articles, prepositions, pronouns and the conjugations of
//! `estar`, `haber`, `ser` and `tener`) that carry no topical weight and are
//! dropped before ranking.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common Spanish function words, lower-cased and accented.
pub static SPANISH_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::with_capacity(320);

    // Articles, prepositions, conjunctions, pronouns and adverbs
    set.extend([
        "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
        "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos",
        "en", "entre", "hasta", "la", "las", "le", "les", "lo", "los", "me", "mi", "mis", "mucho",
        "muchos", "muy", "más", "mí", "mía", "mías", "mío", "míos", "nada", "ni", "no", "nos",
        "nosotras", "nosotros", "nuestra", "nuestras", "nuestro", "nuestros", "o", "os", "otra",
        "otras", "otro", "otros", "para", "pero", "poco", "por", "porque", "que", "quien",
        "quienes", "qué", "se", "si", "sin", "sobre", "su", "sus", "suya", "suyas", "suyo", "suyos",
        "sí", "también", "tanto", "te", "ti", "todo", "todos", "tu", "tus", "tuya", "tuyas", "tuyo",
        "tuyos", "tú", "un", "una", "uno", "unos", "vosotras", "vosotros", "vuestra", "vuestras",
        "vuestro", "vuestros", "y", "ya", "yo", "él",
    ]);

    // Demonstratives
    set.extend([
        "esa", "esas", "ese", "eso", "esos", "esta", "estas", "este", "esto", "estos",
    ]);

    // estar
    set.extend([
        "estaba", "estabais", "estaban", "estabas", "estad", "estada", "estadas", "estado",
        "estados", "estamos", "estando", "estar", "estaremos", "estará", "estarán", "estarás",
        "estaré", "estaréis", "estaría", "estaríais", "estaríamos", "estarían", "estarías",
        "estemos", "estoy", "estuve", "estuviera", "estuvierais", "estuvieran", "estuvieras",
        "estuvieron", "estuviese", "estuvieseis", "estuviesen", "estuvieses", "estuvimos",
        "estuviste", "estuvisteis", "estuviéramos", "estuviésemos", "estuvo", "está", "estábamos",
        "estáis", "están", "estás", "esté", "estéis", "estén", "estés",
    ]);

    // haber
    set.extend([
        "ha", "habida", "habidas", "habido", "habidos", "habiendo", "habremos", "habrá", "habrán",
        "habrás", "habré", "habréis", "habría", "habríais", "habríamos", "habrían", "habrías",
        "habéis", "había", "habíais", "habíamos", "habían", "habías", "han", "has", "hay", "haya",
        "hayamos", "hayan", "hayas", "hayáis", "he", "hemos", "hube", "hubiera", "hubierais",
        "hubieran", "hubieras", "hubieron", "hubiese", "hubieseis", "hubiesen", "hubieses",
        "hubimos", "hubiste", "hubisteis", "hubiéramos", "hubiésemos", "hubo",
    ]);

    // ser
    set.extend([
        "era", "erais", "eran", "eras", "eres", "es", "fue", "fuera", "fuerais", "fueran", "fueras",
        "fueron", "fuese", "fueseis", "fuesen", "fueses", "fui", "fuimos", "fuiste", "fuisteis",
        "fuéramos", "fuésemos", "sea", "seamos", "sean", "seas", "seremos", "será", "serán",
        "serás", "seré", "seréis", "sería", "seríais", "seríamos", "serían", "serías", "seáis",
        "sido", "siendo", "sois", "somos", "son", "soy", "éramos",
    ]);

    // tener
    set.extend([
        "tendremos", "tendrá", "tendrán", "tendrás", "tendré", "tendréis", "tendría", "tendríais",
        "tendríamos", "tendrían", "tendrías", "tened", "tenemos", "tenga", "tengamos", "tengan",
        "tengas", "tengo", "tengáis", "tenida", "tenidas", "tenido", "tenidos", "teniendo",
        "tenéis", "tenía", "teníais", "teníamos", "tenían", "tenías", "tiene", "tienen", "tienes",
        "tuve", "tuviera", "tuvierais", "tuvieran", "tuvieras", "tuvieron", "tuviese", "tuvieseis",
        "tuviesen", "tuvieses", "tuvimos", "tuviste", "tuvisteis", "tuviéramos", "tuviésemos",
        "tuvo",
    ]);

    set
});

/// Check whether `word` is a Spanish stopword (case-sensitive, expects lower case).
pub fn is_stopword(word: &str) -> bool {
    SPANISH_STOPWORDS.contains(word)
}

/// Build a stopword set from the built-in list plus caller-supplied extras.
///
/// Extras are trimmed here and blank ones are skipped. Case is left alone:
/// tokens are lower case, so callers must lower-case extras before passing
/// them in.
pub fn with_extra(extra: &[String]) -> HashSet<&str> {
    let mut set: HashSet<&str> = SPANISH_STOPWORDS.iter().copied().collect();
    set.extend(
        extra
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty()),
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_common_function_words() {
        for word in ["el", "la", "de", "que", "para", "también", "están"] {
            assert!(is_stopword(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn content_words_are_not_stopwords() {
        for word in ["gato", "inteligencia", "medicina", "algoritmos"] {
            assert!(!is_stopword(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn list_size_is_stable() {
        assert!(SPANISH_STOPWORDS.len() > 300);
    }

    #[test]
    fn entries_are_lowercase() {
        assert!(
            SPANISH_STOPWORDS
                .iter()
                .all(|w| w.chars().all(|c| !c.is_uppercase()))
        );
    }

    #[test]
    fn demonstratives_and_hasta_are_listed() {
        for word in ["ese", "esta", "estos", "hasta"] {
            assert!(is_stopword(word), "{word} should be a stopword");
        }
        assert_eq!(SPANISH_STOPWORDS.len(), 309);
    }

    #[test]
    fn with_extra_trims_but_keeps_case() {
        let extra = vec!["  Informe ".to_string()];
        let set = with_extra(&extra);
        assert!(set.contains("Informe"));
        assert!(!set.contains("informe"));
    }

    #[test]
    fn with_extra_adds_words() {
        let extra = vec!["ejemplo".to_string(), "  ".to_string()];
        let set = with_extra(&extra);
        assert!(set.contains("ejemplo"));
        assert!(set.contains("el"));
        assert!(!set.contains(""));
        assert_eq!(set.len(), SPANISH_STOPWORDS.len() + 1);
    }
}
