use time::Date;

use super::ApiRequest;
use crate::api::Params;

/// Transactions on the account, optionally narrowed by date range, channel
/// and program.
///
/// Channel and program are path segments; the dates travel as parameters.
/// A channel id of `0` is a real filter meaning "every channel" and is sent
/// whenever a program is given without a channel.
#[derive(Debug, Clone, Default)]
pub struct ListTransactions {
    pub start: Option<Date>,
    pub stop: Option<Date>,
    pub channel_id: Option<u64>,
    pub program_id: Option<u64>,
}

impl ListTransactions {
    pub fn start(mut self, start: Date) -> Self {
        self.start = Some(start);
        self
    }

    pub fn stop(mut self, stop: Date) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn channel(mut self, channel_id: u64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    pub fn program(mut self, program_id: u64) -> Self {
        self.program_id = Some(program_id);
        self
    }

    // Program ids start at 1, so 0 filters nothing.
    fn program_filter(&self) -> Option<u64> {
        self.program_id.filter(|id| *id != 0)
    }
}

fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

impl ApiRequest for ListTransactions {
    fn path(&self) -> String {
        let program_id = self.program_filter();
        let channel_id = match (self.channel_id, program_id) {
            (None, Some(_)) => Some(0),
            (channel_id, _) => channel_id,
        };

        let mut path = String::from("transactions");
        if let Some(channel_id) = channel_id {
            path.push_str(&format!("/{}", channel_id));
        }
        if let Some(program_id) = program_id {
            path.push_str(&format!("/{}", program_id));
        }
        path
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        if let Some(start) = self.start {
            params.insert("start", format_date(start));
        }
        if let Some(stop) = self.stop {
            params.insert("stop", format_date(stop));
        }
        params
    }
}
