//! Implementation of `canopy search`.

use std::process::ExitCode;

use canopy_search::{SearchOutcome, SearchRequest};

use super::shared::unknown_model;
use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{dim, print_hits, print_json, subheader},
};

/// Searches the path indexes of a dataset and prints the collapsed hits.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let dataset = match ctx.open_dataset(&cmd.source.source) {
        Ok(d) => d,
        Err(code) => return code,
    };

    // An unknown model filter searches nothing; say so instead of printing no results.
    if let Some(model) = &cmd.model
        && dataset.model(model).is_none()
    {
        unknown_model(&dataset, model);
        return ExitCode::FAILURE;
    }

    let mut request = SearchRequest::new(cmd.query.join(" "))
        .with_limit(cmd.limit.unwrap_or(ctx.config.search.limit));
    if let Some(model) = &cmd.model {
        request = request.with_model(model.as_str());
    }

    let outcome = dataset.search(&request);

    if cmd.json {
        return if cmd.explain {
            print_json(&outcome)
        } else {
            print_json(&outcome.hits)
        };
    }

    if cmd.explain {
        print_explain(&request, &outcome);
        return ExitCode::SUCCESS;
    }

    print_hits(&outcome.hits);
    ExitCode::SUCCESS
}

/// Prints how the query was interpreted and how many hits each stage kept.
fn print_explain(request: &SearchRequest, outcome: &SearchOutcome) {
    println!("{}", subheader("Query:"));
    println!("   {}", request.query);
    println!();

    println!("{}", subheader("Tokens:"));
    if outcome.tokens.is_empty() {
        println!("   {}", dim("(empty query)"));
    } else {
        println!("   {}", outcome.tokens.join(" | "));
    }
    println!();

    println!("{}", subheader("Search:"));
    println!("   mode = {:?}", outcome.mode);
    println!(
        "   model = {}",
        request.model.as_deref().unwrap_or("(all models)")
    );
    println!("   limit = {}", request.limit.max(1));
    println!();

    println!("{}", subheader("Hits:"));
    println!("   Raw hits:            {}", outcome.raw_hits);
    println!("   After collapse:      {}", outcome.hits.len());
}
