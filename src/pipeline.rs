// src/pipeline.rs
//! End-to-end run: load → lookup → filter → probe → report
//!
//! Every step runs sequentially in input order. Any lookup or I/O error ends
//! the run before the report file is written.

use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::crtsh::CrtShClient;
use crate::input::load_domains;
use crate::output::human::SummaryPrinter;
use crate::output::write_report;
use crate::probe::Prober;
use crate::progress::ProgressIndicator;
use crate::stats::RunStats;
use crate::types::{flatten, DomainResults};

pub struct Pipeline {
    config: RunConfig,
    client: CrtShClient,
    prober: Prober,
    printer: SummaryPrinter,
    progress: ProgressIndicator,
}

impl Pipeline {
    pub fn new(config: RunConfig) -> Result<Self> {
        let client = CrtShClient::new(
            config.search.url_template.clone(),
            &config.search.user_agent,
        )?;
        let prober = Prober::new(config.probe.port, config.probe_timeout());
        let progress = ProgressIndicator::new(config.show_progress);

        Ok(Self {
            config,
            client,
            prober,
            printer: SummaryPrinter::new(),
            progress,
        })
    }

    /// Replace the summary printer (plain output for tests and pipes)
    pub fn with_summary_printer(mut self, printer: SummaryPrinter) -> Self {
        self.printer = printer;
        self
    }

    /// Query every domain, in order; the first failure aborts
    pub async fn lookup_all(
        &self,
        domains: &[String],
        stats: &mut RunStats,
    ) -> Result<Vec<DomainResults>> {
        self.progress.start_stage("Querying", domains.len());
        let mut results = Vec::with_capacity(domains.len());

        for domain in domains {
            self.progress.set_message(domain.clone());

            let entries = self.client.lookup(domain).await?;
            info!("{}: {} entries", domain, entries.len());

            stats.record_lookup(entries.len());
            results.push(DomainResults::new(domain.clone(), entries));
            self.progress.inc();
        }

        Ok(results)
    }

    /// Probe every entry's host and patch its status in place
    pub async fn probe_all(&self, results: &mut [DomainResults], stats: &mut RunStats) {
        let total = results.iter().map(|r| r.entries.len()).sum();
        self.progress.start_stage("Probing", total);
        info!("Probing {} hosts on port {}", total, self.config.probe.port);

        for result in results.iter_mut() {
            for entry in result.entries.iter_mut() {
                self.progress.set_message(entry.hostname.clone());

                entry.active = self.prober.probe(&entry.hostname).await;
                debug!("{} -> {}", entry.hostname, entry.active);

                stats.record_probe(entry.active);
                self.progress.inc();
            }
        }
    }

    /// Run every stage, echo one summary line per entry to `summary`, then
    /// write the report file
    pub async fn run(&self, summary: &mut dyn Write) -> Result<RunStats> {
        let mut stats = RunStats::new();

        let domains = load_domains(&self.config.input_path)?;
        info!(
            "Loaded {} domains from {}",
            domains.len(),
            self.config.input_path.display()
        );

        let mut results = self.lookup_all(&domains, &mut stats).await?;

        if self.config.min_time.is_enabled() {
            let dropped = self.config.min_time.apply_all(&mut results);
            stats.record_filtered(dropped);
            info!(
                "Dropped {} entries logged at or before {}",
                dropped,
                self.config.min_time.threshold()
            );
        }

        if self.config.probe_hosts {
            self.probe_all(&mut results, &mut stats).await;
        }

        let rows = flatten(&results);
        self.progress
            .suspend(|| self.printer.print_rows(&rows, summary))?;
        self.progress.finish();

        write_report(&rows, self.config.output_format, &self.config.output_path())?;

        Ok(stats)
    }
}
