pub mod gateway_writer;
