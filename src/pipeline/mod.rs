pub mod nmt_train;
