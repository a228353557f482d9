use crate::error::{GraphError, GraphResult};
use crate::participants::factory::ParticipantInput;
use clap::Parser;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "giftflow")]
#[command(about = "Builds the capacity network for a gift exchange", long_about = None)]
pub struct Args {
    /// Comma separated list of people
    #[arg(short = 'p', long)]
    pub people: Option<String>,

    /// Number of people
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub num: Option<i64>,

    /// Also list every edge
    #[arg(long)]
    pub edges: bool,
}

impl Args {
    /// Picks the effective participant input. Names win over a count.
    pub fn participant_input(&self) -> GraphResult<ParticipantInput> {
        let names = self.people.as_deref().filter(|p| !p.is_empty());
        let num = self.num.filter(|n| *n != 0);

        match (names, num) {
            (Some(names), num) => {
                if let Some(num) = num {
                    warn!(num, "both names and a count given, ignoring the count");
                }
                Ok(ParticipantInput::Names(
                    names.split(',').map(|n| n.trim().to_string()).collect(),
                ))
            }
            (None, Some(num)) => Ok(ParticipantInput::Count(num)),
            (None, None) => Err(GraphError::invalid_input(
                "provide either --people or --num",
            )),
        }
    }
}
