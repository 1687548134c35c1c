use serde::Serialize;

/// Business segment as far as outreach wording is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Agro,
    Mercado,
    Farma,
    Other,
}

impl Segment {
    /// Keyword checked against the raw segment text, in priority order.
    const KEYWORDS: [(&'static str, Segment); 3] = [
        ("AGRO", Segment::Agro),
        ("MERCADO", Segment::Mercado),
        ("FARMA", Segment::Farma),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Agro => "Agronegócio",
            Self::Mercado => "Supermercado",
            Self::Farma => "Farmácia",
            Self::Other => "Outros",
        }
    }

    pub fn pitch(self, company_name: &str) -> String {
        match self {
            Self::Agro => format!(
                "Olá, vi que a {company_name} é referência no Agro. Temos um sistema que prevê a demanda de vacinas pra não sobrar estoque. Faz sentido?"
            ),
            Self::Mercado => format!(
                "Olá! A {company_name} perde muito perecível vencido? Temos uma IA que ajusta o preço automático pra vender antes de estragar."
            ),
            Self::Farma => format!(
                "Olá equipe da {company_name}. Nossa ferramenta ajuda a recuperar margem de medicamentos próximos ao vencimento."
            ),
            Self::Other => format!(
                "Olá, gostaria de apresentar uma solução de estoque para a {company_name}."
            ),
        }
    }
}

/// Case-sensitive containment test; the first keyword found wins.
pub fn classify_segment(segment: &str) -> Segment {
    Segment::KEYWORDS
        .iter()
        .find(|(keyword, _)| segment.contains(*keyword))
        .map(|(_, tag)| *tag)
        .unwrap_or(Segment::Other)
}

pub fn generate_pitch(segment: &str, company_name: &str) -> String {
    classify_segment(segment).pitch(company_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_keyword_priority() {
        assert_eq!(classify_segment("AGRO-PECUARIA"), Segment::Agro);
        assert_eq!(classify_segment("SUPERMERCADO"), Segment::Mercado);
        assert_eq!(classify_segment("FARMACIA"), Segment::Farma);
        assert_eq!(classify_segment("AGROMERCADO"), Segment::Agro);
        assert_eq!(classify_segment("MERCADO FARMA"), Segment::Mercado);
        assert_eq!(classify_segment("OUTRO"), Segment::Other);
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(classify_segment("agropecuaria"), Segment::Other);
        assert_eq!(classify_segment("Farmacia"), Segment::Other);
    }

    #[test]
    fn empty_segment_gets_generic_pitch() {
        assert_eq!(
            generate_pitch("", "LOJA"),
            "Olá, gostaria de apresentar uma solução de estoque para a LOJA."
        );
    }

    #[test]
    fn agro_pitch_mentions_company_and_vaccine_demand() {
        let pitch = generate_pitch("AGRO-PECUARIA", "Fazenda X");
        assert!(pitch.contains("Fazenda X"));
        assert!(pitch.contains("referência no Agro"));
        assert!(pitch.contains("demanda de vacinas"));
    }

    #[test]
    fn mercado_and_farma_pitches_use_their_templates() {
        assert!(generate_pitch("SUPERMERCADO", "BOM PREÇO").contains("perecível vencido"));
        assert!(generate_pitch("FARMACIA", "DROGA BOA")
            .starts_with("Olá equipe da DROGA BOA."));
    }

    #[test]
    fn other_segment_gets_generic_template() {
        assert_eq!(
            generate_pitch("OUTRO", "Z"),
            "Olá, gostaria de apresentar uma solução de estoque para a Z."
        );
    }
}
