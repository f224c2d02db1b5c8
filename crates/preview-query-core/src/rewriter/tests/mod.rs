mod query_rewriter_tests;
