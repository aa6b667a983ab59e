use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use quadwar::{Move, Player};
use serde::Serialize;

/// Writes each finished game as a JSON file into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

#[derive(Serialize)]
pub struct RecordedMove {
    pub player: Player,
    #[serde(rename = "move")]
    pub mv: Move,
}

#[derive(Serialize)]
struct RecordedGame<'a> {
    moves: &'a [RecordedMove],
    result: &'a str,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    pub fn write_game(&mut self, moves: &[RecordedMove], result: &str) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, &RecordedGame { moves, result })?;
        self.num += 1;
        Ok(())
    }
}
