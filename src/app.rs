//! Command implementations for the `recall` binary.
//! Every command loads the question set snapshot; commands that rate write it back.

use anyhow::{Context, Result};
use recall::export::json::{export_json_to_path, import_json};
use recall::i18n::{format_date, format_interval};
use recall::{
    Clock, DueStatus, Locale, PracticeSession, ProgressSummary, QuestionReview, QuestionSet,
    QuestionStatus, Scheduler, SelfRating, TextFormatter, classify_due_status, due_queue,
};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// One line of `status` / `due` output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionLine {
    id: i64,
    title: String,
    status: QuestionStatus,
    due: DueStatus,
}

pub struct App {
    path: PathBuf,
    set: QuestionSet,
    scheduler: Scheduler,
    locale: Locale,
    clock: Box<dyn Clock>,
    format: OutputFormat,
}

/// Accepts a rating word or a button number 1-4.
fn parse_rating(input: &str) -> recall::Result<SelfRating> {
    match input.trim().parse::<i32>() {
        Ok(button) => SelfRating::try_from(button),
        Err(_) => input.parse(),
    }
}

impl App {
    pub fn open(
        path: &Path,
        scheduler: Scheduler,
        locale: Locale,
        clock: Box<dyn Clock>,
        format: OutputFormat,
    ) -> Result<Self> {
        let set = import_json(path)
            .with_context(|| format!("Failed to load question set from '{}'", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            set,
            scheduler,
            locale,
            clock,
            format,
        })
    }

    fn save(&self) -> Result<()> {
        export_json_to_path(&self.set, &self.path)
            .with_context(|| format!("Failed to save question set to '{}'", self.path.display()))
    }

    fn lines<'a>(&self, reviews: impl Iterator<Item = &'a QuestionReview>) -> Vec<QuestionLine> {
        let now = self.clock.now();
        reviews
            .map(|review| QuestionLine {
                id: review.question.id,
                title: review.question.title.clone(),
                status: review.status(),
                due: classify_due_status(review.next_review_at(), now, &self.locale),
            })
            .collect()
    }

    fn print_lines(&self, lines: &[QuestionLine]) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(lines)?),
            OutputFormat::Plain => {
                for line in lines {
                    println!(
                        "#{:<5} {:<10} {:<24} {}",
                        line.id,
                        self.locale.status_label(line.status),
                        line.due.text,
                        line.title
                    );
                }
            }
        }
        Ok(())
    }

    pub fn status(&self) -> Result<()> {
        let lines = self.lines(self.set.questions.iter());
        self.print_lines(&lines)
    }

    pub fn due(&self) -> Result<()> {
        let queue = due_queue(&self.set.questions, self.clock.now());
        let lines = self.lines(queue.into_iter());
        self.print_lines(&lines)
    }

    pub fn summary(&self) -> Result<()> {
        let summary = ProgressSummary::from_reviews(&self.set.questions, self.clock.now());
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            OutputFormat::Plain => {
                println!("{}: {} questions", self.set.name, summary.total);
                println!("  {:<10} {}", self.locale.status_label(QuestionStatus::New), summary.new);
                println!(
                    "  {:<10} {}",
                    self.locale.status_label(QuestionStatus::Learning),
                    summary.learning
                );
                println!(
                    "  {:<10} {}",
                    self.locale.status_label(QuestionStatus::Mastered),
                    summary.mastered
                );
                println!("  due now: {}, upcoming: {}", summary.due, summary.upcoming);
            }
        }
        Ok(())
    }

    pub fn preview(&self, id: i64) -> Result<()> {
        let review = self
            .set
            .get(id)
            .ok_or(recall::RecallError::QuestionNotFound(id))?;
        let state = review.current_state(&self.scheduler);
        let preview = self.scheduler.preview_intervals(&state, self.clock.now())?;
        let labels: Vec<String> = preview
            .iter()
            .map(|(rating, days)| format!("{}: {}", rating, format_interval(*days)))
            .collect();
        println!("#{} {}", id, review.question.title);
        println!("  {}", labels.join("   "));
        Ok(())
    }

    pub fn rate(&mut self, id: i64, rating: &str) -> Result<()> {
        let rating = parse_rating(rating)?;
        let now = self.clock.now();
        let state = self.set.apply_rating(id, rating, now, &self.scheduler)?.clone();
        self.save()?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
            OutputFormat::Plain => {
                let next = state.next_review_at().map(format_date).unwrap_or_default();
                println!(
                    "#{} rated {}: {}, next review {} ({} days), EF {:.2}",
                    id,
                    rating,
                    self.locale.status_label(state.status()),
                    next,
                    state.interval_days(),
                    state.ease_factor()
                );
            }
        }
        Ok(())
    }

    /// Runs an interactive session: Enter reveals the answer, then a rating
    /// (word or 1-4) is read. `q` stops early; progress so far is kept.
    pub fn practice(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        let mut session =
            PracticeSession::new_from_due(&self.set, self.clock.now(), self.scheduler.clone());
        if session.is_completed() {
            writeln!(output, "Nothing to practice in '{}'.", self.set.name)?;
            return Ok(());
        }

        let mut round = 0;
        let mut line = String::new();
        while !session.is_completed() {
            if session.round_number != round {
                round = session.round_number;
                writeln!(output, "{}", session.phase_message())?;
            }
            let Some(review) = session.current() else {
                break;
            };
            writeln!(output, "\n{}", review.question.title)?;
            write!(output, "[Enter] show answer, [q] quit > ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 || line.trim() == "q" {
                break;
            }
            session.toggle_answer();
            writeln!(output, "{}", session.revealed_answer().unwrap_or_default())?;

            let rating = loop {
                write!(output, "Rate poor/fair/good/great (1-4) > ")?;
                output.flush()?;
                line.clear();
                if input.read_line(&mut line)? == 0 {
                    break None;
                }
                match parse_rating(&line) {
                    Ok(rating) => break Some(rating),
                    Err(e) => writeln!(output, "{}", e)?,
                }
            };
            let Some(rating) = rating else {
                break;
            };

            session.grade_current(rating, self.clock.now())?;
            session.next_question();
        }

        if session.is_completed() {
            writeln!(output, "\nSession complete.")?;
        }
        self.set.merge(session.into_reviews());
        self.save()
    }
}
