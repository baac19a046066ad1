pub mod cexio;
