use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use smear_bot::policy::{CautiousPolicy, GreedyPolicy, Policy, PolicyPlayer};
use smear_core::game::events::{EventSink, GameEvent};
use smear_core::game::game_state::{GameConfig, GameError, GameState};
use smear_core::game::player::Player;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{PolicyKind, ResolvedOutputs, SimConfig};

/// Plays the configured number of games and streams one JSONL row per
/// game, then writes a win-rate summary.
pub struct SimRunner {
    config: SimConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub games_played: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize result row: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("game {game}: {source}")]
    Game {
        game: usize,
        #[source]
        source: GameError,
    },
}

/// One finished game, as written to the JSONL stream.
#[derive(Debug, Serialize)]
struct GameRow {
    game: usize,
    seed: u64,
    hands: u32,
    standings: Vec<i32>,
    winners: Vec<String>,
}

/// Forwards engine events to tracing and keeps counts the summary reports.
#[derive(Debug, Default)]
struct TraceSink {
    tricks: usize,
    two_sets: usize,
    bidders_set: usize,
}

impl EventSink for TraceSink {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::TrickResolved { winner, cards } => {
                self.tricks += 1;
                event!(Level::TRACE, winner = %winner, cards = cards.len(), "trick resolved");
            }
            GameEvent::ForcedTwoSet { dealer } => {
                self.two_sets += 1;
                event!(Level::DEBUG, dealer = %dealer, "forced two-set");
            }
            GameEvent::HandScored { scores, bidder_set } => {
                if *bidder_set {
                    self.bidders_set += 1;
                }
                event!(Level::DEBUG, ?scores, bidder_set, "hand scored");
            }
            GameEvent::GameOver { winners, standings } => {
                event!(Level::DEBUG, ?winners, ?standings, "game over");
            }
            _ => {}
        }
    }
}

impl SimRunner {
    pub fn new(config: SimConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or(0));

        let game_config = GameConfig {
            seats: self.config.seats(),
            cards_to_deal: self.config.rules.cards_to_deal,
            target_score: self.config.rules.target_score,
        };

        let mut wins = vec![0usize; self.config.seats()];
        let mut hands_total = 0u64;
        let mut sink = TraceSink::default();
        let mut rows_written = 0usize;

        for game_index in 0..self.config.games {
            let game_seed = rng.next_u64();
            let mut game = GameState::with_seed(game_config, game_seed)
                .map_err(|source| RunnerError::Game { game: game_index, source })?;
            let mut players = self.build_players();

            while !game.is_game_over() {
                game.play_hand(&mut players, &mut sink)
                    .map_err(|source| RunnerError::Game { game: game_index, source })?;
            }

            let winners = game.winners();
            for seat in &winners {
                wins[seat.index()] += 1;
            }
            hands_total += game.hand_number() as u64;

            let row = GameRow {
                game: game_index,
                seed: game_seed,
                hands: game.hand_number(),
                standings: game.cumulative_scores().standings().to_vec(),
                winners: winners
                    .iter()
                    .map(|seat| self.config.players[seat.index()].name.clone())
                    .collect(),
            };
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
        }
        writer.flush()?;

        self.write_summary(&wins, hands_total, &sink)?;

        Ok(RunSummary {
            games_played: self.config.games,
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
        })
    }

    fn build_players(&self) -> Vec<Box<dyn Player>> {
        self.config
            .players
            .iter()
            .map(|player| {
                let policy: Box<dyn Policy> = match player.policy {
                    PolicyKind::Greedy => Box::new(GreedyPolicy::new()),
                    PolicyKind::Cautious => Box::new(CautiousPolicy::new()),
                };
                Box::new(PolicyPlayer::new(player.name.clone(), policy)) as Box<dyn Player>
            })
            .collect()
    }

    fn write_summary(
        &self,
        wins: &[usize],
        hands_total: u64,
        sink: &TraceSink,
    ) -> Result<(), RunnerError> {
        let games = self.config.games;
        let mut out = String::new();
        out.push_str(&format!("# Smear simulation `{}`\n\n", self.config.run_id));
        out.push_str(&format!(
            "{games} games, {:.1} hands per game on average.\n\n",
            hands_total as f64 / games as f64
        ));
        out.push_str("| player | policy | wins | win rate |\n");
        out.push_str("| --- | --- | ---: | ---: |\n");
        for (player, &won) in self.config.players.iter().zip(wins) {
            out.push_str(&format!(
                "| {} | {:?} | {} | {:.1}% |\n",
                player.name,
                player.policy,
                won,
                100.0 * won as f64 / games as f64
            ));
        }
        out.push_str(&format!(
            "\n{} hands ended in a forced two-set; the bidder was set {} times ({} tricks played).\n",
            sink.two_sets, sink.bidders_set, sink.tricks
        ));
        fs::write(&self.outputs.summary_md, out)?;
        Ok(())
    }
}

fn ensure_parent(parent: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = parent {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}
