use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use kink_test::error::AppError;
use kink_test::presentation::{present, ResultPresentation};
use kink_test::quiz::{Answer, QuizService, TestResult};
use kink_test::store::MemoryResultStore;

#[derive(Args, Debug)]
pub(crate) struct QuizScoreArgs {
    /// Path to a JSON file holding an array of { question_id, option_id }
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional answers file; a canned dominance-leaning session otherwise
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Print the stored result payload as JSON at the end of the demo
    #[arg(long)]
    pub(crate) show_payload: bool,
}

pub(crate) fn run_quiz_score(args: QuizScoreArgs) -> Result<(), AppError> {
    let answers = read_answers(&args.answers)?;

    let service = QuizService::new(Arc::new(MemoryResultStore::new()));
    let outcome = service.submit(&answers)?;

    println!(
        "Scored {} answer(s) against the standard question bank",
        answers.len()
    );
    render_result(&outcome.result);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        answers,
        show_payload,
    } = args;

    let answers = match answers {
        Some(path) => read_answers(&path)?,
        None => canned_answers(),
    };

    let store = Arc::new(MemoryResultStore::new());
    let service = QuizService::new(store.clone());

    println!("Kink profile quiz demo");
    println!(
        "Answering {} of {} questions\n",
        answers.len(),
        service.bank().len()
    );

    let outcome = service.submit(&answers)?;
    if outcome.persisted {
        println!("Result persisted under id {}", outcome.result.id);
    } else {
        println!("Storage unavailable; showing the in-memory result");
    }

    render_result(&outcome.result);

    // Read the result back the way the results page would.
    match present(store.as_ref(), &outcome.result.id)? {
        ResultPresentation::Ready { result } => {
            println!("\nReload check: result {} loads back intact", result.id);
            if show_payload {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("Stored payload:\n{json}"),
                    Err(err) => println!("Stored payload unavailable: {err}"),
                }
            }
        }
        ResultPresentation::Retake { message } => {
            println!("\nReload check surprised us: {message}");
        }
    }

    Ok(())
}

fn read_answers(path: &PathBuf) -> Result<Vec<Answer>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let answers: Vec<Answer> = serde_json::from_str(&raw)?;
    Ok(answers)
}

fn canned_answers() -> Vec<Answer> {
    vec![
        Answer::new("role", "lead"),
        Answer::new("control", "uneasy"),
        Answer::new("sensation", "deliver"),
        Answer::new("words", "orders"),
        Answer::new("restraint", "tie"),
        Answer::new("caring", "structure"),
        Answer::new("structure", "set-rules"),
        Answer::new("aftercare", "comfort"),
    ]
}

fn render_result(result: &TestResult) {
    println!("\nPrimary archetype: {}", result.primary.name);
    if !result.secondary.is_empty() {
        let names: Vec<&str> = result
            .secondary
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        println!("Secondary: {}", names.join(", "));
    }
    println!("Confidence: {:.0}%", result.confidence * 100.0);

    println!("\nTrait scores");
    for (axis, value) in result.scores.iter() {
        if value > 0.0 {
            println!("- {}: {:.0}%", axis.label(), value * 100.0);
        }
    }

    println!("\n{}", result.analysis.summary);

    if !result.analysis.strengths.is_empty() {
        println!("\nStrengths");
        for line in &result.analysis.strengths {
            println!("- {line}");
        }
    }

    if !result.analysis.growth_areas.is_empty() {
        println!("\nWorth exploring");
        for line in &result.analysis.growth_areas {
            println!("- {line}");
        }
    }

    println!("\nRecommendations");
    for line in &result.recommendations.communication {
        println!("- [communication] {line}");
    }
    for line in &result.recommendations.exploration {
        println!("- [exploration] {line}");
    }
    for line in &result.recommendations.aftercare {
        println!("- [aftercare] {line}");
    }

    println!("\nNext steps");
    for (index, step) in result.next_steps.iter().enumerate() {
        println!("{}. {step}", index + 1);
    }
}
