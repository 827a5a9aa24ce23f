mod dummy_data_tests;
mod eltwise_tests;
