mod analyzer;

pub use analyzer::DependencyAnalyzer;
