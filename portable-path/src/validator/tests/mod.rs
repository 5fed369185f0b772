mod root_length;
