use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The three kinds of cat a household can be handed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatKind {
    Play,
    Hunter,
    Clean,
}

impl CatKind {
    /// Every kind, in the order the cats are lined up for a draw
    pub const ALL: [CatKind; 3] = [CatKind::Play, CatKind::Hunter, CatKind::Clean];

    /// Name used to label output lines
    pub fn type_name(&self) -> &'static str {
        match self {
            CatKind::Play => "PlayCat",
            CatKind::Hunter => "HunterCat",
            CatKind::Clean => "CleanCat",
        }
    }

    /// Position of this kind in `CatKind::ALL`
    pub fn index(&self) -> usize {
        match self {
            CatKind::Play => 0,
            CatKind::Hunter => 1,
            CatKind::Clean => 2,
        }
    }
}

/// One draw: which cat was picked and what it did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub draw: u64,
    pub index: usize,
    pub cat: CatKind,
    pub type_name: String,
    pub action: String,
}
