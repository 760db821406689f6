use anyhow::Context;
use model::QuizSet;
use std::{env, ffi::OsString, fs, path::PathBuf, str::FromStr};

/// How the final results are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON, for other programs to consume.
    Json,
}

impl FromStr for SummaryFormat {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> anyhow::Result<Self> {
        match text {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("unknown summary format `{text}` (expected `text` or `json`)"),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON quiz file. The built-in quiz is used when absent.
    pub quiz_path: Option<PathBuf>,
    pub summary: SummaryFormat,
}

impl Config {
    /// Reads `QUIZ_PATH` and `QUIZ_SUMMARY`.
    pub fn from_env() -> anyhow::Result<Self> {
        let summary = match env::var("QUIZ_SUMMARY") {
            Ok(format) => Some(format),
            Err(env::VarError::NotPresent) => None,
            Err(err) => return Err(err).context("cannot read QUIZ_SUMMARY"),
        };
        Self::from_vars(env::var_os("QUIZ_PATH"), summary.as_deref())
    }

    fn from_vars(quiz_path: Option<OsString>, summary: Option<&str>) -> anyhow::Result<Self> {
        let summary = match summary {
            Some(format) => format.parse()?,
            None => SummaryFormat::default(),
        };
        let quiz_path = quiz_path.filter(|path| !path.is_empty()).map(PathBuf::from);
        Ok(Self { quiz_path, summary })
    }

    pub fn load_quiz(&self) -> anyhow::Result<QuizSet> {
        let Some(path) = &self.quiz_path else {
            log::debug!("no quiz file configured; using the built-in quiz");
            return Ok(model::fixture::wizarding_world());
        };

        log::debug!("loading quiz from {}", path.display());
        let json = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
        parse_quiz(&json).with_context(|| format!("invalid quiz in {}", path.display()))
    }
}

pub fn parse_quiz(json: &str) -> anyhow::Result<QuizSet> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::{parse_quiz, Config, SummaryFormat};
    use std::path::PathBuf;

    #[test]
    fn defaults_to_builtin_quiz_and_text() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.load_quiz().unwrap(), model::fixture::wizarding_world());
    }

    #[test]
    fn reads_path_and_format() {
        let config = Config::from_vars(Some("quiz.json".into()), Some("json")).unwrap();
        assert_eq!(config.quiz_path, Some(PathBuf::from("quiz.json")));
        assert_eq!(config.summary, SummaryFormat::Json);

        let config = Config::from_vars(Some("".into()), Some("text")).unwrap();
        assert_eq!(config.quiz_path, None);
        assert_eq!(config.summary, SummaryFormat::Text);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Config::from_vars(None, Some("yaml")).unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let config = Config::from_vars(Some("/nonexistent/quiz.json".into()), None).unwrap();
        let err = config.load_quiz().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/quiz.json"));
    }

    #[test]
    fn parses_quiz_files() {
        let quiz = parse_quiz(
            r#"[
                {"prompt": "Is water wet?", "type": "true-false", "choices": ["False", "True"], "correct": 1},
                {"prompt": "Primes?", "type": "multiple-answer", "choices": ["2", "4", "5"], "correct": [0, 2]}
            ]"#,
        )
        .unwrap();
        assert_eq!(quiz.len(), 2);

        let err = parse_quiz(r#"[{"prompt": "?", "type": "essay", "choices": [], "correct": 0}]"#).unwrap_err();
        assert!(err.to_string().contains("Unrecognized question type"));
        assert!(parse_quiz("[]").is_err());
    }
}
