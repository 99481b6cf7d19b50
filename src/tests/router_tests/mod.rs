mod api_tests;
mod page_tests;
mod predict_flow_tests;
