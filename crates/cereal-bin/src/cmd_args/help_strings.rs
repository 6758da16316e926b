pub static THRESHOLD_HELP: &str = "Similarity a glyph must exceed to be reported

Similarity is the mean of the Pearson correlations of the row 
and column ink counts, between -1 and 1. The best candidate is 
reported only if its similarity is strictly greater than this value.";

pub static STRICT_HELP: &str = "Treat header inconsistencies as errors

By default a wrong file size or plane count in the BMP header 
is logged and ignored. With this flag such files are rejected.";
