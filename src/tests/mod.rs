mod add_note;
