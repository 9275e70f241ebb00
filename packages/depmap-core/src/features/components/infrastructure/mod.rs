mod component_analyzer;

pub use component_analyzer::ComponentAnalyzer;
