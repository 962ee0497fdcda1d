//! Per-locale string catalogs
//!
//! Static tables; presentation layers look them up by [`Locale`] and never
//! format or mutate them. Adding a locale means adding one table here and
//! one arm to [`strings`].

use crate::Locale;

/// The full string set a perception front end needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub enter_age: &'static str,
    pub years_old: &'static str,
    pub result: &'static str,
    pub max_age: &'static str,
    pub perceived_age: &'static str,
    pub graph: &'static str,
    pub about_title: &'static str,
    pub about_description: &'static str,
    pub models_title: &'static str,
    pub real_time_model: &'static str,
    pub real_time_desc: &'static str,
    pub subjective_time_model: &'static str,
    pub subjective_time_desc: &'static str,
    pub quote: &'static str,
    pub source: &'static str,
}

/// Look up the catalog for a locale.
pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
    }
}

static EN: Strings = Strings {
    title: "Time Perception Calculator",
    subtitle: "Explore how our perception of time changes as we age.",
    enter_age: "Enter Your Age",
    years_old: "years old",
    result: "Result",
    max_age: "Maximum Age",
    perceived_age: "Perceived Age",
    graph: "Time Perception Graph",
    about_title: "About Time Perception",
    about_description: "The perception of time tends to speed up as we age, a phenomenon that has been studied and modeled in various ways. This calculator uses two different models to estimate how time might feel at different ages:",
    models_title: "Models Explained",
    real_time_model: "Proportional to Real Time",
    real_time_desc: "This model suggests that our perception of time is logarithmic, meaning each subsequent year feels shorter than the last.",
    subjective_time_model: "Proportional to Subjective Time",
    subjective_time_desc: "This model proposes that our perception of time is related to the ratio of a time period to our total age.",
    quote: "A proportional theory of time perception would suggest that a year feels much longer to a child than to an adult because it represents a larger proportion of the child's total life experience.",
    source: "Wikipedia - Time Perception: Changes with Age",
};

static ES: Strings = Strings {
    title: "Calculadora de Percepción del Tiempo",
    subtitle: "Explora cómo cambia nuestra percepción del tiempo a medida que envejecemos.",
    enter_age: "Ingresa tu Edad",
    years_old: "años",
    result: "Resultado",
    max_age: "Edad Máxima",
    perceived_age: "Edad Percibida",
    graph: "Gráfico de Percepción del Tiempo",
    about_title: "Sobre la Percepción del Tiempo",
    about_description: "La percepción del tiempo tiende a acelerarse a medida que envejecemos, un fenómeno que ha sido estudiado y modelado de varias maneras. Esta calculadora utiliza dos modelos diferentes para estimar cómo podría sentirse el tiempo a diferentes edades:",
    models_title: "Modelos Explicados",
    real_time_model: "Proporcional al Tiempo Real",
    real_time_desc: "Este modelo sugiere que nuestra percepción del tiempo es logarítmica, lo que significa que cada año subsiguiente se siente más corto que el anterior.",
    subjective_time_model: "Proporcional al Tiempo Subjetivo",
    subjective_time_desc: "Este modelo propone que nuestra percepción del tiempo está relacionada con la proporción de un período de tiempo respecto a nuestra edad total.",
    quote: "Una teoría proporcional de la percepción del tiempo sugeriría que un año se siente mucho más largo para un niño que para un adulto porque representa una proporción mayor de la experiencia de vida total del niño.",
    source: "Wikipedia - Percepción del Tiempo: Cambios con la Edad",
};
