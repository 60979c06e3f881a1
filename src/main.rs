use clap::Parser;
use couple_quest::{Config, CoupleQuest};

fn main() {
    let config = Config::parse();

    let quest = match CoupleQuest::from_config(&config) {
        Ok(quest) => quest,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quest.run() {
        log::error!("game aborted: {}", e);
        eprintln!("Error running game: {}", e);
        std::process::exit(1);
    }
}
