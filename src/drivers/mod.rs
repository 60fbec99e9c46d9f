pub mod footswitch;
