//! One-shot analysis command: fetch once, print a console report

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use owo_colors::OwoColorize;
use tracing::info;

use super::resolve_keywords;
use crate::config::GeminiConfig;
use crate::data_paths::DataPaths;
use crate::gemini::GeminiClient;
use crate::logging::{init_logging, LogMode, LoggingConfig};
use crate::types::MarketAnalysisResponse;

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Keywords to analyze (comma-separated, default: seed list)
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

pub struct AnalyzeCommand {
    args: AnalyzeArgs,
}

impl AnalyzeCommand {
    pub fn new(args: AnalyzeArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let logging_config = LoggingConfig::new(LogMode::ConsoleAndFile, data_paths);
        init_logging(logging_config)?;

        let config = GeminiConfig::from_env()?;
        let client = GeminiClient::new(config);
        let keywords = resolve_keywords(&self.args.keywords);

        println!(
            "{} {} palavras-chave...",
            "Analisando".blue().bold(),
            keywords.len()
        );

        let analysis = client
            .analyze(&keywords)
            .await
            .context("Falha na análise de dados")?;

        info!(trends = analysis.trends.len(), "Analysis complete");
        print_report(&analysis);
        Ok(())
    }
}

fn print_report(analysis: &MarketAnalysisResponse) {
    println!();
    println!("{}", "Monitoramento de Tendências".bold());
    println!("{}", analysis.market_overview);
    println!();

    println!("{}", "Top Oportunidades".bold());
    for (i, opportunity) in analysis.top_opportunities.iter().take(3).enumerate() {
        println!("  {}. {}", i + 1, opportunity);
    }
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Produto",
        "Categoria",
        "Procura",
        "Tendência",
        "Crescimento",
        "Score",
    ]);

    for product in &analysis.trends {
        table.add_row(vec![
            Cell::new(&product.name),
            Cell::new(&product.category),
            Cell::new(product.demand_level.label()),
            Cell::new(product.trend.label()),
            Cell::new(format!("{:+.1}%", product.growth_percentage)),
            Cell::new(format!("{:.0}/100", product.opportunity_score)),
        ]);
    }

    println!("{table}");

    for product in &analysis.trends {
        println!(
            "{} {}",
            format!("{}:", product.name).bold(),
            product.reasoning.italic()
        );
    }
}
