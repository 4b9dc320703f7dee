use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::system::ChessSystem;

#[derive(Debug)]
pub enum ReportError {
    NoTournamentsEnded,
    Io(io::Error),
    Serde(serde_json::Error),
}

impl From<io::Error> for ReportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

pub type ReportResult<T> = Result<T, ReportError>;

pub fn write_player_levels<W: Write>(chess: &ChessSystem, out: &mut W) -> ReportResult<()> {
    for (player, level) in chess.player_levels() {
        writeln!(out, "{player} {level:.2}")?;
    }
    Ok(())
}

pub fn save_player_levels<P: AsRef<Path>>(chess: &ChessSystem, path: P) -> ReportResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_player_levels(chess, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn write_tournament_statistics<W: Write>(chess: &ChessSystem, out: &mut W) -> ReportResult<()> {
    if !chess.any_tournament_ended() {
        return Err(ReportError::NoTournamentsEnded);
    }
    for stats in chess.statistics().into_iter().filter(|stats| stats.ended) {
        writeln!(out, "{}", stats.winner.unwrap_or(0))?;
        writeln!(out, "{}", stats.longest_game_secs)?;
        writeln!(out, "{:.2}", stats.average_game_secs)?;
        writeln!(out, "{}", stats.location)?;
        writeln!(out, "{}", stats.match_count)?;
        writeln!(out, "{}", stats.player_count)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn save_tournament_statistics<P: AsRef<Path>>(chess: &ChessSystem, path: P) -> ReportResult<()> {
    // Checked before touching the filesystem so a rejected save leaves no
    // empty file behind.
    if !chess.any_tournament_ended() {
        return Err(ReportError::NoTournamentsEnded);
    }
    let mut out = BufWriter::new(File::create(path)?);
    write_tournament_statistics(chess, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn write_statistics_json<W: Write>(chess: &ChessSystem, out: &mut W) -> ReportResult<()> {
    serde_json::to_writer_pretty(out, &chess.statistics())?;
    Ok(())
}

pub fn save_statistics_json<P: AsRef<Path>>(chess: &ChessSystem, path: P) -> ReportResult<()> {
    let json = serde_json::to_string_pretty(&chess.statistics())?;
    fs::write(path, json)?;
    Ok(())
}
