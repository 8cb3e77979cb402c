use llsql_ast::{AstError, Program, TreeBuilder};
use llsql_grammar::{sql_grammar, Grammar};
use llsql_predict_sets::{FirstSets, FollowSets, GrammarSetsExt};
use llsql_symbol::Token;
use llsql_table::{PredictionTable, TableConflict};
use llsql_trace::{ParseError, Trace, TraceParser};
use log::{debug, warn};

/// Run-time settings of an [`Analyzer`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnalyzerOptions {
    /// How many upcoming tokens each trace record keeps.
    pub preview_len: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        AnalyzerOptions {
            preview_len: TraceParser::DEFAULT_PREVIEW_LEN,
        }
    }
}

/// A grammar together with everything computed from it.
///
/// All analysis happens in the constructor. After that the analyzer is never
/// mutated, so `&Analyzer` can be used from many threads at once; each call
/// owns its parse stack and trace.
#[derive(Clone, Debug)]
pub struct Analyzer {
    grammar: Grammar,
    first_sets: FirstSets,
    follow_sets: FollowSets,
    table: PredictionTable,
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Creates an analyzer for the SQL grammar.
    pub fn new() -> Self {
        Self::with_grammar(sql_grammar())
    }

    /// Creates an analyzer for any grammar over the SQL symbols.
    ///
    /// Table conflicts do not stop construction. They can be inspected through
    /// [`Analyzer::conflicts`].
    pub fn with_grammar(grammar: Grammar) -> Self {
        let undefined = grammar.undefined_nonterminals();
        if !undefined.is_empty() {
            warn!("nonterminals without productions: {:?}", undefined);
        }
        let first_sets = grammar.first_sets();
        let follow_sets = grammar.follow_sets_with_first(&first_sets);
        let table = PredictionTable::new(&grammar, &first_sets, &follow_sets);
        debug!(
            "analyzed {} productions: {} table entries, {} conflicts",
            grammar.len(),
            table.num_entries(),
            table.conflicts().len()
        );
        Analyzer {
            grammar,
            first_sets,
            follow_sets,
            table,
            options: AnalyzerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn first_sets(&self) -> &FirstSets {
        &self.first_sets
    }

    pub fn follow_sets(&self) -> &FollowSets {
        &self.follow_sets
    }

    pub fn table(&self) -> &PredictionTable {
        &self.table
    }

    /// Conflicts found while building the table, in the order found.
    pub fn conflicts(&self) -> &[TableConflict] {
        self.table.conflicts()
    }

    /// A parser over this analyzer's table, configured by its options.
    pub fn trace_parser(&self) -> TraceParser<'_> {
        TraceParser::new(&self.grammar, &self.first_sets, &self.follow_sets, &self.table)
            .with_preview_len(self.options.preview_len)
    }

    pub fn tree_builder(&self) -> TreeBuilder<'_> {
        TreeBuilder::new(&self.grammar)
    }

    /// Traces one statement through the table-driven parser.
    pub fn trace(&self, tokens: &[Token]) -> Result<Trace, ParseError> {
        self.trace_parser().parse(tokens)
    }

    /// Builds the syntax tree of one statement.
    pub fn build_tree(&self, tokens: &[Token]) -> Result<Program, AstError> {
        self.tree_builder().build(tokens)
    }

    /// Lexes and traces one statement.
    #[cfg(feature = "llsql-lex")]
    pub fn trace_str(&self, input: &str) -> Result<Trace, ParseError> {
        self.trace(&llsql_lex::tokenize(input))
    }

    /// Lexes one statement and builds its syntax tree.
    #[cfg(feature = "llsql-lex")]
    pub fn build_tree_str(&self, input: &str) -> Result<Program, AstError> {
        self.build_tree(&llsql_lex::tokenize(input))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
