#[derive(Debug, Clone, Default)]
pub struct SimStats {
    pub ticks: u64,
    pub external_resets: u64,
    pub releases: u64,
    pub last_release_tick: Option<u64>,
}

impl SimStats {
    pub fn print(&self) {
        println!("--- Run Statistics ---");
        println!("Ticks:           {}", self.ticks);
        println!("External resets: {}", self.external_resets);
        println!("Releases:        {}", self.releases);
        match self.last_release_tick {
            Some(tick) => println!("Last release:    tick {}", tick),
            None => println!("Last release:    never"),
        }
    }
}
