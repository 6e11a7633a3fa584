mod todo_repository_tests;
