mod build_pipeline;
mod cli_build;
mod glossary_degradation;
