//! Console rendering of analyses and recommendations.

use std::io::{self, Write};

use classifier::CategoryScores;
use colored::Colorize;
use knowledge::KnowledgeBase;
use pairing::Recommendation;

/// Column at which explanations wrap
const WRAP_WIDTH: usize = 70;
const INDENT: &str = "   ";

/// Confidence shown as 1 to 5 stars; the score is clamped then truncated
pub fn star_rating(score: f64) -> String {
    let stars = score.clamp(1.0, 5.0) as usize;
    "★".repeat(stars)
}

/// Print the detected categories, strongest first
pub fn write_analysis(out: &mut impl Write, food: &str, categories: &CategoryScores) -> io::Result<()> {
    writeln!(out, "\n{}", "=== Food Analysis ===".bold().blue())?;
    writeln!(out, "Input: {}", food)?;
    writeln!(out, "\nCategories detected:")?;
    for (category, score) in categories.sorted_desc() {
        if score > 0.0 {
            writeln!(out, "- {}: {:.1}", category, score)?;
        }
    }
    writeln!(out)
}

/// Print one block per recommendation
pub fn write_recommendations(
    out: &mut impl Write,
    food: &str,
    recommendations: &[Recommendation],
    knowledge: &KnowledgeBase,
) -> io::Result<()> {
    let header = format!("=== Wine Recommendations for {} ===", food);
    writeln!(out, "\n{}\n", header.bold().blue())?;

    for (i, rec) in recommendations.iter().enumerate() {
        writeln!(
            out,
            "{}. {} {}",
            (i + 1).to_string().green(),
            rec.wine.bold(),
            star_rating(rec.score).yellow()
        )?;

        if let Some(profile) = knowledge.wine_profile(&rec.wine) {
            writeln!(
                out,
                "{}{}-bodied, {}",
                INDENT,
                profile.body,
                profile.characteristics.join(", ")
            )?;
        }

        writeln!(out, "{}\n", wrap_explanation(&rec.explanation))?;
    }
    Ok(())
}

fn wrap_explanation(explanation: &str) -> String {
    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(INDENT)
        .subsequent_indent(INDENT);
    textwrap::fill(explanation, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_star_rating_clamps() {
        assert_eq!(star_rating(0.5), "★");
        assert_eq!(star_rating(1.8), "★");
        assert_eq!(star_rating(4.8), "★★★★");
        assert_eq!(star_rating(11.1), "★★★★★");
    }

    #[test]
    fn test_wrap_explanation_indents_every_line() {
        let text = "Perfect for pasta + tomato combinations \
                    A medium-bodied savory, earthy, rustic wine with cherry, plum notes";
        let wrapped = wrap_explanation(text);

        assert!(wrapped.lines().count() > 1);
        for line in wrapped.lines() {
            assert!(line.starts_with(INDENT));
            assert!(line.chars().count() <= WRAP_WIDTH);
        }
    }

    #[test]
    fn test_write_analysis_skips_zero_scores() {
        plain();
        let categories: CategoryScores =
            [("pasta", 2.4), ("oil", 0.0), ("tomato", 3.9)].into_iter().collect();

        let mut out = Vec::new();
        write_analysis(&mut out, "pasta", &categories).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("- tomato: 3.9\n- pasta: 2.4\n"));
        assert!(!text.contains("oil"));
    }

    #[test]
    fn test_write_recommendations() {
        plain();
        let kb = KnowledgeBase::builtin().unwrap();
        let recommendations = vec![
            Recommendation {
                wine: "Merlot".to_string(),
                score: 2.4,
                explanation: "Pairs well with pizza".to_string(),
            },
            Recommendation {
                wine: "Vermentino".to_string(),
                score: 1.0,
                explanation: "Perfect for pasta + pesto combinations".to_string(),
            },
        ];

        let mut out = Vec::new();
        write_recommendations(&mut out, "pizza", &recommendations, &kb).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("=== Wine Recommendations for pizza ==="));
        assert!(text.contains("1. Merlot ★★\n   medium-full-bodied, smooth, approachable, fruit-forward\n   Pairs well with pizza\n"));
        // no profile line for Vermentino
        assert!(text.contains("2. Vermentino ★\n   Perfect for pasta + pesto combinations\n"));
    }
}
