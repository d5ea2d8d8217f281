use clap::{Arg, ArgAction, Command};
use como_fala::lookup::API_KEY_VAR;
use como_fala::{
    ComoFalaError, ComoFalaResult, MerriamWebsterClient, RenderedPronunciation, assemble,
    parse_entries_str, pronounce,
};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("como-fala")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shows how to pronounce an English word, spelled for Portuguese speakers")
        .arg(
            Arg::new("word")
                .help("English word or phrase to look up")
                .required_unless_present("file")
                .index(1),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Read a saved dictionary response (JSON) instead of querying the API"),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .short('k')
                .help(format!("Merriam-Webster API key (default: ${})", API_KEY_VAR)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log each step of the lookup")
                .action(ArgAction::SetTrue),
        )
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();

    let verbose = matches.get_flag("verbose");
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let word = matches
        .get_one::<String>("word")
        .map(String::as_str)
        .unwrap_or_default();

    let result = match matches.get_one::<String>("file") {
        Some(path) => from_file(Path::new(path), word),
        None => from_api(word, matches.get_one::<String>("key")).await,
    };

    match result {
        Ok(rendered) => {
            if matches.get_flag("json") {
                match serde_json::to_string_pretty(&rendered) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_table(&rendered);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn from_api(word: &str, key: Option<&String>) -> ComoFalaResult<RenderedPronunciation> {
    let client = match key {
        Some(key) => MerriamWebsterClient::new(key.clone())?,
        None => MerriamWebsterClient::from_env()?,
    };
    pronounce(&client, word).await
}

/// Render a saved response; `word` only labels the error when it has no entry
fn from_file(path: &Path, word: &str) -> ComoFalaResult<RenderedPronunciation> {
    let body = std::fs::read_to_string(path).map_err(|e| {
        ComoFalaError::ConfigError(format!("Failed to read file '{}': {}", path.display(), e))
    })?;
    let label = match word.trim() {
        "" => path.display().to_string(),
        word => word.to_string(),
    };
    let entries = parse_entries_str(&body)?;
    let entry = entries
        .first()
        .ok_or_else(|| ComoFalaError::WordNotFound(label.clone()))?;
    assemble(entry).map_err(|e| match e {
        ComoFalaError::WordNotFound(_) => ComoFalaError::WordNotFound(label),
        other => other,
    })
}

/// Two aligned rows: written syllables over spoken ones, stressed syllable in brackets
fn print_table(rendered: &RenderedPronunciation) {
    let cell = |index: usize, text: &str| {
        if rendered.is_stressed(index) {
            format!("[{}]", text)
        } else {
            text.to_string()
        }
    };
    let written: Vec<String> = rendered
        .word_syllables
        .iter()
        .enumerate()
        .map(|(i, s)| cell(i, s))
        .collect();
    let spoken: Vec<String> = rendered
        .syllables
        .iter()
        .enumerate()
        .map(|(i, s)| cell(i, s))
        .collect();

    let columns = written.len().max(spoken.len());
    let width = |i: usize| {
        let w = written.get(i).map_or(0, |s| s.chars().count());
        let s = spoken.get(i).map_or(0, |s| s.chars().count());
        w.max(s)
    };
    let row = |cells: &[String]| {
        (0..columns)
            .map(|i| {
                let text = cells.get(i).map_or("", String::as_str);
                format!("{:<width$}", text, width = width(i))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!("{}", row(&written));
    println!("{}", row(&spoken));
    if let Some(url) = &rendered.audio_url {
        println!("{}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_response(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("como-fala-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_word_optional_with_file() {
        assert!(cli().try_get_matches_from(["como-fala", "--file", "cat.json"]).is_ok());
        assert!(cli().try_get_matches_from(["como-fala", "cat"]).is_ok());
        assert!(cli().try_get_matches_from(["como-fala"]).is_err());
    }

    #[test]
    fn test_from_file_renders_first_entry() {
        let path = saved_response("cat", r#"[{"hwi":{"hw":"cat","prs":[{"mw":"ˈkat"}]}}]"#);
        let rendered = from_file(&path, "").unwrap();
        assert_eq!(rendered.syllables, vec!["két"]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_from_file_not_found_names_word() {
        let path = saved_response("suggestions", r#"["cot", "cut"]"#);
        assert_eq!(
            from_file(&path, "catt"),
            Err(ComoFalaError::WordNotFound("catt".to_string()))
        );
        assert_eq!(
            from_file(&path, ""),
            Err(ComoFalaError::WordNotFound(path.display().to_string()))
        );
        std::fs::remove_file(path).unwrap();
    }
}
