use log::info;
use shared::models::fragments::{assignment::Assignment, envelope::WorkerId};

/// What the coordinator sent and received during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub assignments: u32,
    pub sentinels: u32,
    pub results: u32,
    pub blocks_per_worker: Vec<u32>,
}

impl RunReport {
    pub fn new(workers: usize) -> Self {
        Self {
            blocks_per_worker: vec![0; workers],
            ..Self::default()
        }
    }

    pub fn record_assignment(&mut self, assignment: Assignment) {
        match assignment {
            Assignment::Block(_) => self.assignments += 1,
            Assignment::Stop => self.sentinels += 1,
        }
    }

    pub fn record_result(&mut self, worker: WorkerId) {
        self.results += 1;
        if let Some(count) = self.blocks_per_worker.get_mut(worker) {
            *count += 1;
        }
    }

    pub fn log_summary(&self) {
        info!(
            "{} blocks assigned, {} results received, {} workers stopped",
            self.assignments, self.results, self.sentinels
        );
        for (worker, blocks) in self.blocks_per_worker.iter().enumerate() {
            info!("Worker {} computed {} blocks", worker, blocks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_blocks_and_sentinels_separately() {
        let mut report = RunReport::new(2);
        report.record_assignment(Assignment::Block(0));
        report.record_assignment(Assignment::Block(1));
        report.record_assignment(Assignment::Stop);
        report.record_result(1);

        assert_eq!(report.assignments, 2);
        assert_eq!(report.sentinels, 1);
        assert_eq!(report.results, 1);
        assert_eq!(report.blocks_per_worker, vec![0, 1]);
    }
}
