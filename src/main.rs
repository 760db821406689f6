use quizdeck::{config::Config, driver};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let config = Config::from_env()?;
    let quiz = config.load_quiz()?;
    log::info!("loaded quiz with {} questions", quiz.len());

    // Run the quiz over the terminal
    let mut stdout = io::stdout().lock();
    let Some(outcome) = driver::play(&quiz, io::stdin().lock(), &mut stdout)? else {
        log::info!("quiz abandoned before the last question");
        return Ok(());
    };

    let summary = outcome.summary();
    log::info!("finished with {} of {} correct", summary.score, summary.total);
    driver::write_summary(&mut stdout, &summary, config.summary)?;
    stdout.flush()?;
    Ok(())
}
