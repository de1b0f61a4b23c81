//! Bordered success summary printed after scaffolding

use crate::answers::AnswerSet;
use crate::product::ProductConfig;
use colored::Colorize;
use console::measure_text_width;
use std::path::Path;

/// Script table shown in the summary, with one-line explanations
const SCRIPTS: &[(&str, &str)] = &[
    ("dev", "Start development server"),
    ("start", "Start production server"),
    ("test", "Run tests"),
    ("lint", "Run linter"),
];

/// Print the final summary block: headline, next steps, available scripts
pub fn print_summary<C: ProductConfig>(config: &C, answers: &AnswerSet) {
    let package_manager = answers.package_manager;

    let mut lines: Vec<String> = Vec::new();
    lines.push("Success! Your project is ready.".green().to_string());
    lines.push(String::new());
    lines.push("Next steps:".bold().to_string());
    lines.push(String::new());
    for step in config.next_steps(Path::new(&answers.project_name), package_manager) {
        lines.push(format!("  {}", step.cyan()));
    }
    lines.push(String::new());
    lines.push("Available scripts:".bold().to_string());
    lines.push(String::new());
    for (script, what) in SCRIPTS {
        let command = package_manager.script_command(script);
        // Pad on the plain string; ANSI codes would break format width specs
        let pad = " ".repeat(14usize.saturating_sub(command.len()));
        lines.push(format!("  {}{} - {}", command.cyan(), pad, what));
    }

    println!();
    for line in render_box(&lines) {
        println!("{line}");
    }
    println!();
}

/// Render content lines inside a rounded border with one space of padding
fn render_box(lines: &[String]) -> Vec<String> {
    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);

    let horizontal = "─".repeat(width + 2);
    let mut rendered = Vec::with_capacity(lines.len() + 2);

    rendered.push(format!("╭{horizontal}╮").green().to_string());
    for line in lines {
        let pad = " ".repeat(width - measure_text_width(line));
        rendered.push(format!("{} {line}{pad} {}", "│".green(), "│".green()));
    }
    rendered.push(format!("╰{horizontal}╯").green().to_string());

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_lines_align() {
        let lines = vec![
            "short".to_string(),
            String::new(),
            "a much longer line of content".to_string(),
        ];

        let rendered = render_box(&lines);
        assert_eq!(rendered.len(), lines.len() + 2);

        let widths: Vec<usize> = rendered.iter().map(|l| measure_text_width(l)).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_box_handles_styled_content() {
        let lines = vec![
            format!("{}", "styled".green()),
            "plain but longer than styled".to_string(),
        ];

        let rendered = render_box(&lines);
        let widths: Vec<usize> = rendered.iter().map(|l| measure_text_width(l)).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_empty_box() {
        let rendered = render_box(&[]);
        assert_eq!(rendered.len(), 2);
    }
}
