pub mod a028_sale;
