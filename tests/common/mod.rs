pub mod mock_ai;
