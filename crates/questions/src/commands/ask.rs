use crate::cli::{CorpusOptions, OutputFormat};
use questions_core::{Answer, QuestionAnswerer};
use questions_text::Tokenizer;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn run(
    corpus: &Path,
    options: &CorpusOptions,
    query: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let qa = super::build_answerer(corpus, options)?;
    let stdout = std::io::stdout();

    if let Some(question) = query {
        let answer = qa.answer(question)?;
        return render(&mut stdout.lock(), &answer, format);
    }

    tracing::debug!(
        file_matches = qa.config().file_matches,
        sentence_matches = qa.config().sentence_matches,
        "starting prompt loop"
    );
    let stdin = std::io::stdin();
    prompt_loop(&qa, stdin.lock(), stdout.lock(), format)
}

/// Prompt for questions until end of input, an empty line, `quit` or `exit`
fn prompt_loop<T, R, W>(
    qa: &QuestionAnswerer<T>,
    mut input: R,
    mut out: W,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    T: Tokenizer,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "Query: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let question = line.trim();
        if question.is_empty()
            || question.eq_ignore_ascii_case("quit")
            || question.eq_ignore_ascii_case("exit")
        {
            return Ok(());
        }

        let answer = qa.answer(question)?;
        render(&mut out, &answer, format)?;
    }
}

fn render<W: Write>(out: &mut W, answer: &Answer, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(answer)?)?;
        }
        OutputFormat::Plain => {
            if answer.is_empty() {
                writeln!(out, "No matching sentence found.")?;
            }
            for sentence in &answer.sentences {
                writeln!(out, "{}", sentence.id)?;
            }
        }
        OutputFormat::Scores => {
            for file in &answer.files {
                writeln!(out, "[file {:.4}] {}", file.score, file.id)?;
            }
            if answer.is_empty() {
                writeln!(out, "No matching sentence found.")?;
            }
            for sentence in &answer.sentences {
                writeln!(
                    out,
                    "[idf {:.4} density {:.2}] {}",
                    sentence.score, sentence.density, sentence.id
                )?;
            }
        }
    }
    Ok(())
}
