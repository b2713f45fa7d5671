//! Timing command implementation
//!
//! Prints the keying schedule of a Morse string without rendering audio.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use dotdash_code::{schedule, Element, Keying, Pulse, Schedule};

use super::config::ConfigArgs;
use super::morse_input;

#[derive(Debug, Serialize)]
struct TimingOutput<'a> {
    morse: &'a str,
    unit_ms: f64,
    total_units: u64,
    closed_form_units: u64,
    total_seconds: f64,
    letters: usize,
    word_gaps: usize,
    pulse_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pulses: Option<&'a [Pulse]>,
}

/// Run the timing command
///
/// # Arguments
/// * `morse` - Morse string to schedule
/// * `text` - Text to encode and schedule instead of `morse`
/// * `config` - Timing options (tone options are validated but unused)
/// * `show_pulses` - List every pulse
/// * `json` - Output machine-readable JSON
pub fn run(
    morse: Option<&str>,
    text: Option<&str>,
    config: &ConfigArgs,
    show_pulses: bool,
    json: bool,
) -> Result<ExitCode> {
    let morse = morse_input(morse, text)?;
    let config = config.resolve()?;
    let plan = schedule(&morse, &config.keying, 0.0);
    let output = timing_output(&morse, &config.keying, &plan, show_pulses);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Timing:".cyan().bold(), morse);
    println!(
        "  {} {} units x {} ms = {:.3}s",
        "->".green(),
        output.total_units,
        output.unit_ms,
        output.total_seconds
    );
    println!(
        "  {} {} pulses, {} letters, {} word gaps",
        "->".green(),
        output.pulse_count,
        output.letters,
        output.word_gaps
    );
    if output.closed_form_units != output.total_units {
        println!(
            "  {} closed form gives {} units (trailing word separator)",
            "!!".yellow(),
            output.closed_form_units
        );
    }

    if let Some(pulses) = output.pulses {
        println!();
        for pulse in pulses {
            let name = match pulse.element {
                Element::Dot => "dot",
                Element::Dash => "dash",
            };
            println!(
                "  {:>6} {:>9.3}s  {:<4} {:.3}s",
                pulse.offset_units,
                pulse.start,
                name,
                pulse.duration
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn timing_output<'a>(
    morse: &'a str,
    keying: &Keying,
    plan: &'a Schedule,
    show_pulses: bool,
) -> TimingOutput<'a> {
    TimingOutput {
        morse,
        unit_ms: keying.unit_ms,
        total_units: plan.total_units,
        closed_form_units: keying.closed_form_units(morse),
        total_seconds: plan.total_duration(),
        letters: plan.letters,
        word_gaps: plan.word_gaps,
        pulse_count: plan.pulse_count(),
        pulses: show_pulses.then_some(plan.pulses.as_slice()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sos_timing_output() {
        let plan = schedule("... --- ...", &Keying::default(), 0.0);
        let output = timing_output("... --- ...", &Keying::default(), &plan, false);
        assert_eq!(output.total_units, 27);
        assert_eq!(output.closed_form_units, 27);
        assert_eq!(output.letters, 3);
        assert!((output.total_seconds - 1.62).abs() < 1e-9);
        assert!(output.pulses.is_none());
    }

    #[test]
    fn test_pulses_listed_on_request() {
        let plan = schedule(".-", &Keying::default(), 0.0);
        let output = timing_output(".-", &Keying::default(), &plan, true);
        let json = serde_json::to_value(&output).unwrap();
        let pulses = json["pulses"].as_array().unwrap();
        assert_eq!(pulses.len(), 2);
        assert_eq!(pulses[1]["offset_units"], 2);
    }
}
