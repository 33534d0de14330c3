pub mod create_board;
pub mod greet;

pub use create_board::CreateBoardCommand;
pub use greet::GreetCommand;
