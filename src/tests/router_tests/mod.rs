mod reveal_tests;
mod search_flow_tests;
