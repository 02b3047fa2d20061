use std::io::{self, BufRead, Write};
use std::sync::Arc;

use learny::config::Config;
use learny::models::domain::{AnswerValue, Question, QuestionKind};
use learny::services::{LearningSession, OpenAiContentGenerator, SessionStatus};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let generator = Arc::new(OpenAiContentGenerator::new(&config));
    let mut session = LearningSession::new(generator);

    println!("Learny");
    println!("Learny is an AI-powered tool designed to help you learn about any topic.");
    println!("Enter a topic to generate a summary, a timeline, and a quiz. Enter nothing to exit.");

    let stdin = io::stdin();
    loop {
        let topic = read_line(&stdin, "\nWhat do you want to learn about? ");
        if topic.trim().is_empty() {
            break;
        }

        println!("Generating learning content...");
        if let Err(e) = session.submit_topic(&topic).await {
            eprintln!("An error occurred: {e}");
            continue;
        }

        render_bundle(&session);
        run_quiz(&stdin, &mut session);

        if session.status() == SessionStatus::Completed {
            render_results(&session);
        }
    }
}

fn render_bundle(session: &LearningSession) {
    if let Some(title) = session.title() {
        println!("\n=== {title} ===");
    }
    println!("\nSummary");
    println!("{}", session.summary().unwrap_or_default());

    println!("\nTimeline");
    match session.timeline() {
        Some(timeline) => {
            // The timeline value is owned by an external widget; here it is
            // shown as the raw event data.
            println!(
                "{}",
                serde_json::to_string_pretty(timeline).unwrap_or_else(|_| "{}".to_string())
            );
        }
        None => println!("No timeline data available."),
    }
}

fn run_quiz(stdin: &io::Stdin, session: &mut LearningSession) {
    while let Some(question) = session.current_question().cloned() {
        println!("\nQuestion {}", session.current_index() + 1);
        println!("{}", question.text);

        let answer = prompt_answer(stdin, &question);
        session.record_answer(answer);

        if !session.advance() {
            println!("An answer is required to continue.");
        }
    }
}

fn prompt_answer(stdin: &io::Stdin, question: &Question) -> AnswerValue {
    match question.kind {
        QuestionKind::MultipleChoice | QuestionKind::Dropdown => {
            choose_one(stdin, question.options.as_deref().unwrap_or_default())
        }
        QuestionKind::TrueFalse => {
            // The model may omit options for this kind; the choices are fixed.
            choose_one(stdin, &["True".to_string(), "False".to_string()])
        }
        QuestionKind::ShortAnswer => AnswerValue::Text(read_line(stdin, "Your answer: ")),
        QuestionKind::Checkbox => {
            choose_many(stdin, question.options.as_deref().unwrap_or_default())
        }
    }
}

/// Renders numbered options and reads one selection, by number or by text.
/// When the model omitted the options, falls back to free text so the
/// question stays answerable.
fn choose_one(stdin: &io::Stdin, options: &[String]) -> AnswerValue {
    if options.is_empty() {
        println!("No options were provided; answer in your own words.");
        return AnswerValue::Text(read_line(stdin, "Your answer: "));
    }

    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }

    let input = read_line(stdin, "Your answer: ");
    AnswerValue::Text(resolve_choice(&input, options))
}

/// Reads a comma-separated list of selections, by number or by text. Works
/// without options the same way [`choose_one`] does.
fn choose_many(stdin: &io::Stdin, options: &[String]) -> AnswerValue {
    if !options.is_empty() {
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }
    } else {
        println!("No options were provided; answer in your own words.");
    }

    let input = read_line(stdin, "Select all that apply (comma-separated): ");
    AnswerValue::Selection(resolve_selections(&input, options))
}

/// Maps a raw input to an option: a number in range picks that option,
/// anything else is taken verbatim.
fn resolve_choice(input: &str, options: &[String]) -> String {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 && n <= options.len() => options[n - 1].clone(),
        _ => trimmed.to_string(),
    }
}

/// Splits a comma-separated input and maps each entry like [`resolve_choice`].
fn resolve_selections(input: &str, options: &[String]) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| resolve_choice(part, options))
        .collect()
}

fn render_results(session: &LearningSession) {
    let Some((score, results)) = session.results() else {
        return;
    };

    println!("\n=== {}/{} ===", score, results.len());

    for (i, result) in results.iter().enumerate() {
        println!("\nQuestion {}", i + 1);
        println!("{}", result.question.text);
        if result.is_correct {
            println!("  Correct: {}", result.user_answer.display());
        } else {
            println!("  Incorrect: {}", result.user_answer.display());
            println!("  Correct answer: {}", result.question.correct.display());
        }
        println!("  {}", result.question.explanation);
    }
}

fn read_line(stdin: &io::Stdin, prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        // EOF: the interactive session is over
        Ok(0) | Err(_) => std::process::exit(0),
        Ok(_) => line.trim_end_matches(['\n', '\r']).to_string(),
    }
}
