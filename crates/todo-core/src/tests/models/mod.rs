mod todo_patch;
