use super::options::ReportOptions;
use crate::error::{Result, RiskError};
use crate::types::{DisplayColor, RiskAssessment, RiskInput};

/// Asset label used in the printed report when no name was entered
pub const DOCUMENT_ASSET_FALLBACK: &str = "Not specified";

/// Generic likelihood x impact procedure printed in the methodology section.
pub const METHODOLOGY_STEPS: [&str; 8] = [
    "Identify the asset or process under review.",
    "Identify the risk or threat that could affect it.",
    "Assess the likelihood of the risk occurring on a 1-5 scale.",
    "Assess the impact on the organisation if it occurs on a 1-5 scale.",
    "Calculate the risk score as likelihood x impact.",
    "Interpret the score as a Low, Medium or High risk level.",
    "Recommend an action appropriate to the risk level.",
    "Report and record the result in the risk register.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Title,
    Asset,
    Banner,
    Explanation,
    Action,
    Methodology,
    Footer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: Option<DisplayColor>,
}

impl TextStyle {
    pub const TITLE: TextStyle = TextStyle { size: 20.0, bold: true, color: None };
    pub const HEADING: TextStyle = TextStyle { size: 13.0, bold: true, color: None };
    pub const BODY: TextStyle = TextStyle { size: 11.0, bold: false, color: None };
    pub const FOOTER: TextStyle = TextStyle { size: 8.0, bold: false, color: None };

    pub fn banner(color: DisplayColor) -> Self {
        TextStyle {
            size: 16.0,
            bold: true,
            color: Some(color),
        }
    }

    /// Distance between consecutive baselines, in points.
    pub fn leading(&self) -> f32 {
        self.size * 1.35
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub style: TextStyle,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<TextBlock>,
}

impl Section {
    fn new(kind: SectionKind, blocks: Vec<TextBlock>) -> Self {
        Self { kind, blocks }
    }

    fn headed(kind: SectionKind, heading: &str, body: &str) -> Self {
        Self::new(
            kind,
            vec![
                TextBlock::new(heading, TextStyle::HEADING),
                TextBlock::new(body, TextStyle::BODY),
            ],
        )
    }
}

/// Ordered, fully built report content, independent of any output format.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub sections: Vec<Section>,
}

impl ReportDocument {
    pub fn build(
        input: &RiskInput,
        assessment: &RiskAssessment,
        options: &ReportOptions,
    ) -> Result<Self> {
        let title = options.report_title.trim();
        if title.is_empty() {
            return Err(RiskError::render("report title must not be blank"));
        }
        let footer = options.footer_text.trim();
        if footer.is_empty() {
            return Err(RiskError::render("footer text must not be blank"));
        }

        let mut sections = vec![
            Section::new(SectionKind::Title, vec![TextBlock::new(title, TextStyle::TITLE)]),
            Section::headed(
                SectionKind::Asset,
                "What was assessed",
                input.asset_or(DOCUMENT_ASSET_FALLBACK),
            ),
            Section::new(
                SectionKind::Banner,
                vec![TextBlock::new(
                    format!("{} RISK", assessment.level.to_string().to_uppercase()),
                    TextStyle::banner(assessment.color()),
                )],
            ),
            Section::headed(
                SectionKind::Explanation,
                "What this means",
                &assessment.explanation,
            ),
            Section::headed(
                SectionKind::Action,
                "Recommended action",
                &assessment.recommended_action,
            ),
        ];

        if options.include_methodology_steps {
            let mut blocks = vec![TextBlock::new("How this risk was assessed", TextStyle::HEADING)];
            blocks.extend(
                METHODOLOGY_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| TextBlock::new(format!("{}. {}", i + 1, step), TextStyle::BODY)),
            );
            sections.push(Section::new(SectionKind::Methodology, blocks));
        }

        sections.push(Section::new(
            SectionKind::Footer,
            vec![TextBlock::new(footer, TextStyle::FOOTER)],
        ));

        Ok(Self {
            title: title.to_string(),
            sections,
        })
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::types::RiskLevel;

    fn section(doc: &ReportDocument, kind: SectionKind) -> Option<&Section> {
        doc.sections.iter().find(|s| s.kind == kind)
    }

    fn build(asset: &str, likelihood: u8, impact: u8, options: &ReportOptions) -> ReportDocument {
        let input = RiskInput::new(asset, likelihood, impact);
        let assessment = classify(likelihood, impact).unwrap();
        ReportDocument::build(&input, &assessment, options).unwrap()
    }

    #[test]
    fn test_section_order_with_methodology() {
        let doc = build("Web Application", 3, 5, &ReportOptions::default());
        assert_eq!(
            doc.section_kinds(),
            vec![
                SectionKind::Title,
                SectionKind::Asset,
                SectionKind::Banner,
                SectionKind::Explanation,
                SectionKind::Action,
                SectionKind::Methodology,
                SectionKind::Footer,
            ]
        );
        let methodology = section(&doc, SectionKind::Methodology).unwrap();
        // heading + 8 steps
        assert_eq!(methodology.blocks.len(), 9);
        assert!(methodology.blocks[1].text.starts_with("1. Identify the asset"));
        assert!(methodology.blocks[8].text.starts_with("8. Report"));
    }

    #[test]
    fn test_section_order_without_methodology() {
        let options = ReportOptions::default().with_methodology_steps(false);
        let doc = build("Web Application", 3, 5, &options);
        assert_eq!(
            doc.section_kinds(),
            vec![
                SectionKind::Title,
                SectionKind::Asset,
                SectionKind::Banner,
                SectionKind::Explanation,
                SectionKind::Action,
                SectionKind::Footer,
            ]
        );
    }

    #[test]
    fn test_banner_is_uppercase_bold_and_colored() {
        let doc = build("Mail server", 3, 5, &ReportOptions::default());
        let banner = &section(&doc, SectionKind::Banner).unwrap().blocks[0];
        assert_eq!(banner.text, "HIGH RISK");
        assert!(banner.style.bold);
        assert_eq!(banner.style.color, Some(RiskLevel::High.color()));

        let doc = build("Mail server", 1, 2, &ReportOptions::default());
        let banner = &section(&doc, SectionKind::Banner).unwrap().blocks[0];
        assert_eq!(banner.text, "LOW RISK");
        assert_eq!(banner.style.color, Some(DisplayColor::Green));
    }

    #[test]
    fn test_blank_asset_uses_document_fallback() {
        let doc = build("   ", 2, 2, &ReportOptions::default());
        let asset = section(&doc, SectionKind::Asset).unwrap();
        assert_eq!(asset.blocks[1].text, "Not specified");
    }

    #[test]
    fn test_custom_title_and_footer() {
        let options = ReportOptions::default()
            .with_title("Vendor Risk Review")
            .with_footer("Prepared by the GRC team");
        let doc = build("CRM", 2, 4, &options);
        assert_eq!(doc.title, "Vendor Risk Review");
        assert_eq!(doc.sections[0].blocks[0].text, "Vendor Risk Review");
        assert_eq!(
            doc.sections.last().unwrap().blocks[0].text,
            "Prepared by the GRC team"
        );
    }

    #[test]
    fn test_blank_title_is_render_error() {
        let input = RiskInput::new("CRM", 2, 2);
        let assessment = classify(2, 2).unwrap();
        let options = ReportOptions::default().with_title("  ");
        let err = ReportDocument::build(&input, &assessment, &options).unwrap_err();
        assert!(matches!(err, RiskError::Render(_)));
    }
}
