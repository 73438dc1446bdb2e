//! Word wrapping and pagination for the printed report.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner.
//! Lines are measured with the Helvetica advance widths from [`super::metrics`].

use super::document::{ReportDocument, TextStyle};
use super::metrics::{char_width, text_width};
use crate::error::Result;

/// ISO A4 in points
pub const PAGE_WIDTH_PT: f32 = 595.28;
pub const PAGE_HEIGHT_PT: f32 = 841.89;
pub const MARGIN_PT: f32 = 40.0;
/// Vertical space between two sections
pub const SECTION_GAP_PT: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub style: TextStyle,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl PositionedLine {
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PositionedLine>,
}

pub fn usable_width() -> f32 {
    PAGE_WIDTH_PT - 2.0 * MARGIN_PT
}

/// Greedy word wrap on measured width. Words wider than a line are split
/// between characters. Fails if any character has no builtin glyph.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f32) -> Result<Vec<(String, f32)>> {
    let space = char_width(' ', style)?;
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0f32;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        let mut word_width = text_width(&word, style)?;

        while word_width > max_width {
            if !current.is_empty() {
                lines.push((std::mem::take(&mut current), current_width));
                current_width = 0.0;
            }
            let (split, width) = longest_fitting_prefix(&word, style, max_width)?;
            lines.push((word[..split].to_string(), width));
            word = word[split..].to_string();
            word_width = text_width(&word, style)?;
        }

        if word.is_empty() {
            continue;
        }
        if !current.is_empty() && current_width + space + word_width > max_width {
            lines.push((std::mem::take(&mut current), current_width));
            current_width = 0.0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += space;
        }
        current.push_str(&word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push((current, current_width));
    }
    Ok(lines)
}

// Byte index and width of the longest prefix of `word` that fits; always at
// least one character so wrapping makes progress.
fn longest_fitting_prefix(word: &str, style: &TextStyle, max_width: f32) -> Result<(usize, f32)> {
    let mut split = 0;
    let mut width = 0.0f32;
    for (index, c) in word.char_indices() {
        let advance = char_width(c, style)?;
        if index > 0 && width + advance > max_width {
            break;
        }
        width += advance;
        split = index + c.len_utf8();
    }
    Ok((split, width))
}

/// Flow every section of `document` onto as many A4 pages as needed.
pub fn paginate(document: &ReportDocument) -> Result<Vec<PageLayout>> {
    let top = PAGE_HEIGHT_PT - MARGIN_PT;
    let mut pages = vec![PageLayout::default()];
    let mut cursor = top;

    for (index, section) in document.sections.iter().enumerate() {
        if index > 0 {
            cursor -= SECTION_GAP_PT;
        }
        for block in &section.blocks {
            for (text, width) in wrap_text(&block.text, &block.style, usable_width())? {
                let mut baseline = cursor - block.style.leading();
                if baseline < MARGIN_PT {
                    pages.push(PageLayout::default());
                    cursor = top;
                    baseline = cursor - block.style.leading();
                }
                if let Some(page) = pages.last_mut() {
                    page.lines.push(PositionedLine {
                        text,
                        style: block.style,
                        x: MARGIN_PT,
                        y: baseline,
                        width,
                    });
                }
                cursor = baseline;
            }
        }
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::error::RiskError;
    use crate::reporting::options::ReportOptions;
    use crate::types::RiskInput;

    fn layout_for(asset: &str) -> Result<Vec<PageLayout>> {
        let input = RiskInput::new(asset, 2, 2);
        let assessment = classify(2, 2).unwrap();
        let doc = ReportDocument::build(&input, &assessment, &ReportOptions::default()).unwrap();
        paginate(&doc)
    }

    fn texts(lines: &[(String, f32)]) -> Vec<&str> {
        lines.iter().map(|(t, _)| t.as_str()).collect()
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_text(text, &TextStyle::BODY, 60.0).unwrap();
        assert!(lines.len() > 1);
        for (line, width) in &lines {
            assert!(*width <= 60.0);
            assert!((text_width(line, &TextStyle::BODY).unwrap() - width).abs() < 1e-3);
        }
        assert_eq!(texts(&lines).join(" "), text);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        // 'W' is 944 units, three of them fit in 30pt at 10pt
        let style = TextStyle { size: 10.0, bold: false, color: None };
        let lines = wrap_text("WWWWWWW ab", &style, 30.0).unwrap();
        assert_eq!(texts(&lines), vec!["WWW", "WWW", "W ab"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_text("   ", &TextStyle::BODY, 100.0).unwrap().is_empty());
    }

    #[test]
    fn test_short_report_fits_one_page_inside_margins() {
        let pages = layout_for("Web Application").unwrap();
        assert_eq!(pages.len(), 1);
        for line in &pages[0].lines {
            assert!(line.y >= MARGIN_PT);
            assert!(line.y <= PAGE_HEIGHT_PT - MARGIN_PT);
            assert_eq!(line.x, MARGIN_PT);
        }
        // lines flow downwards
        let ys: Vec<f32> = pages[0].lines.iter().map(|l| l.y).collect();
        assert!(ys.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_wide_glyphs_stay_inside_right_margin() {
        for asset in ["W".repeat(300), "MW ".repeat(120), "Ÿ—™".repeat(80)] {
            let pages = layout_for(&asset).unwrap();
            for line in pages.iter().flat_map(|p| &p.lines) {
                let measured = text_width(&line.text, &line.style).unwrap();
                assert!(
                    line.x + measured <= PAGE_WIDTH_PT - MARGIN_PT + 1e-3,
                    "line '{}' ends at {}",
                    line.text,
                    line.x + measured
                );
                assert!(line.right_edge() <= PAGE_WIDTH_PT - MARGIN_PT + 1e-3);
            }
        }
    }

    #[test]
    fn test_long_asset_name_spills_onto_more_pages() {
        let asset = "critical-system ".repeat(2_000);
        let input = RiskInput::new(asset, 2, 2);
        let assessment = classify(2, 2).unwrap();
        let doc = ReportDocument::build(&input, &assessment, &ReportOptions::default()).unwrap();

        let pages = paginate(&doc).unwrap();
        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| !p.lines.is_empty()));
        assert!(pages
            .iter()
            .flat_map(|p| &p.lines)
            .all(|l| l.y >= MARGIN_PT));
        let last_line = &pages.last().unwrap().lines.last().unwrap().text;
        assert_eq!(last_line, &doc.sections.last().unwrap().blocks[0].text);
    }

    #[test]
    fn test_non_latin_asset_cannot_be_laid_out() {
        let err = layout_for("客户数据库").unwrap_err();
        assert!(matches!(err, RiskError::Render(_)));
    }
}
